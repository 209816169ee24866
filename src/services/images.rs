use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Image lookup boundary. Best-effort: a miss yields no image and never
/// aborts the recommendation flow.
pub trait ImageLookup {
    fn image_url(&self, recipe_name: &str) -> Option<String>;
}

/// Image index backed by a JSON map of recipe name to URL.
///
/// Lookups are case-insensitive.
pub struct ImageIndex {
    links: HashMap<String, String>,
}

impl ImageIndex {
    pub fn new(links: HashMap<String, String>) -> Self {
        let links = links
            .into_iter()
            .map(|(name, url)| (name.to_lowercase(), url))
            .collect();
        Self { links }
    }

    /// Load the index from a JSON object file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let links: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self::new(links))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl ImageLookup for ImageIndex {
    fn image_url(&self, recipe_name: &str) -> Option<String> {
        self.links.get(&recipe_name.to_lowercase()).cloned()
    }
}

/// No-op lookup for runs without an image index.
pub struct NoImages;

impl ImageLookup for NoImages {
    fn image_url(&self, _recipe_name: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lookup_case_insensitive() {
        let mut links = HashMap::new();
        links.insert(
            "Oatmeal".to_string(),
            "https://img.example/oatmeal.jpg".to_string(),
        );
        let index = ImageIndex::new(links);

        assert_eq!(
            index.image_url("oatmeal").as_deref(),
            Some("https://img.example/oatmeal.jpg")
        );
        assert_eq!(
            index.image_url("OATMEAL").as_deref(),
            Some("https://img.example/oatmeal.jpg")
        );
        assert!(index.image_url("pancakes").is_none());
    }

    #[test]
    fn test_no_images_always_misses() {
        assert!(NoImages.image_url("anything").is_none());
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{"Oatmeal": "https://img.example/oatmeal.jpg"}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let index = ImageIndex::from_json_path(file.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.image_url("Oatmeal").is_some());
    }
}
