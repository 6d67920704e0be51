/// Formatting the admin rules editor is allowed to produce.
///
/// Built once at startup and handed to whoever renders the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesEditorConfig {
    pub sizes: Vec<String>,
    pub formats: Vec<String>,
    pub toolbar: Vec<Vec<String>>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RulesEditorConfig {
    fn default() -> Self {
        Self {
            sizes: strings(&[
                "8px", "10px", "12px", "14px", "16px", "18px", "20px", "22px", "24px", "28px",
                "32px", "36px", "48px",
            ]),
            formats: strings(&[
                "size",
                "bold",
                "italic",
                "underline",
                "strike",
                "color",
                "background",
                "list",
                "bullet",
                "link",
                "image",
            ]),
            toolbar: vec![
                strings(&["size"]),
                strings(&["bold", "italic", "underline", "strike"]),
                strings(&["color", "background"]),
                strings(&["list:ordered", "list:bullet"]),
                strings(&["link", "image"]),
                strings(&["clean"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_whitelist() {
        let config = RulesEditorConfig::default();
        assert_eq!(config.sizes.first().map(String::as_str), Some("8px"));
        assert_eq!(config.sizes.last().map(String::as_str), Some("48px"));
        assert!(!config.sizes.iter().any(|s| s == "13px"));
        assert!(config.formats.iter().any(|f| f == "strike"));
        assert_eq!(config.sizes.len(), 13);
    }
}
