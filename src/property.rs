/// One labeled fact shown by the properties container.
///
/// The container keeps properties in the order they were given; two
/// properties may share a display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DisplayProperty {
    display_name: String,
    value: String,
}

impl DisplayProperty {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for DisplayProperty {
    fn from((display_name, value): (N, V)) -> Self {
        Self::new(display_name, value)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::DisplayProperty;

    #[test]
    fn reads_host_json() {
        let json = r#"[
            {"displayName": "Server", "value": "localhost"},
            {"displayName": "Version", "value": "16.0"}
        ]"#;
        let properties: Vec<DisplayProperty> = serde_json::from_str(json).unwrap();
        assert_eq!(
            properties,
            vec![
                DisplayProperty::new("Server", "localhost"),
                DisplayProperty::new("Version", "16.0"),
            ]
        );
    }
}
