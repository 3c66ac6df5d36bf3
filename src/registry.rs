use super::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// A coordinate as the registry stores it: usually a decimal string, sometimes a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(Degrees),
    Text(String),
}

impl Coordinate {
    pub fn degrees(&self) -> anyhow::Result<Degrees> {
        match self {
            Self::Number(x) => Ok(*x),
            Self::Text(s) => s
                .trim()
                .parse::<Degrees>()
                .map_err(|e| anyhow::anyhow!("{:?}: {}", s, e)),
        }
    }
}

/// One entry of the node registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub ip: String,
    pub port: String,
    pub lat: Coordinate,
    pub lon: Coordinate,
}

impl TryFrom<&Node> for Point {
    type Error = anyhow::Error;
    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        let lat = node
            .lat
            .degrees()
            .with_context(|| format!("latitude of {}", node.ip))?;
        let lon = node
            .lon
            .degrees()
            .with_context(|| format!("longitude of {}", node.ip))?;
        Ok(Point::new(lat, lon))
    }
}

/// Shapes of JSON accepted as point input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    /// `{"message": [node, ...]}` as served by the registry.
    Envelope { message: Vec<Node> },
    /// `[node, ...]`
    Nodes(Vec<Node>),
    /// `[[lat, lon], ...]`
    Points(Vec<Point>),
}

/// Reads points out of node registry responses.
pub struct Registry;

impl Registry {
    /// Parses any accepted payload shape into points, preserving order.
    pub fn parse(json: &str) -> anyhow::Result<Vec<Point>> {
        let payload = serde_json::from_str::<Payload>(json)
            .context("expected a registry envelope, a node array, or a [lat, lon] array")?;
        Self::points(payload)
    }
    /// Same as [`Registry::parse`], from any reader.
    pub fn read<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<Point>> {
        let payload = serde_json::from_reader::<_, Payload>(reader)
            .context("expected a registry envelope, a node array, or a [lat, lon] array")?;
        Self::points(payload)
    }
    fn points(payload: Payload) -> anyhow::Result<Vec<Point>> {
        let points = match payload {
            Payload::Envelope { message } | Payload::Nodes(message) => message
                .iter()
                .map(Point::try_from)
                .collect::<anyhow::Result<Vec<Point>>>()?,
            Payload::Points(points) => points,
        };
        log::debug!("{:<32}{:<32}", "registry points", points.len());
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_of_string_coordinates() {
        let json = r#"{"message":[
            {"ip":"1.2.3.4","port":"8333","lat":"52.52","lon":"13.405"},
            {"ip":"5.6.7.8","port":"8333","lat":"-33.8688","lon":" 151.2093 "}
        ]}"#;
        let points = Registry::parse(json).unwrap();
        assert_eq!(
            points,
            vec![Point::new(52.52, 13.405), Point::new(-33.8688, 151.2093)]
        );
    }

    #[test]
    fn bare_nodes_with_numeric_coordinates() {
        let json = r#"[{"ip":"1.2.3.4","port":"8333","lat":10.5,"lon":-20}]"#;
        assert_eq!(Registry::parse(json).unwrap(), vec![Point::new(10.5, -20.)]);
    }

    #[test]
    fn bare_pairs() {
        let json = "[[0,0],[0,0.01],[50,50]]";
        let points = Registry::read(json.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point::new(0., 0.01));
    }

    #[test]
    fn unparseable_coordinate_names_node() {
        let json = r#"{"message":[{"ip":"9.9.9.9","port":"8333","lat":"north","lon":"1"}]}"#;
        let err = Registry::parse(json).unwrap_err();
        assert!(format!("{:#}", err).contains("latitude of 9.9.9.9"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Registry::parse(r#"{"nodes": 3}"#).is_err());
    }
}
