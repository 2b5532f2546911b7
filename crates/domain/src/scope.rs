use serde::{Deserialize, Serialize};

/// The specific data a caller wants to access alongside a permission check.
///
/// Each dimension is optional. A dimension only narrows the check when both
/// the scope and the user carry a value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScope {
    /// Region owning the data.
    #[serde(default)]
    pub region_id: Option<String>,
    /// Squadron owning the data.
    #[serde(default)]
    pub squadron_id: Option<String>,
    /// Cadet the data belongs to.
    #[serde(default)]
    pub cadet_id: Option<String>,
}

impl ResourceScope {
    /// Scope targeting data of one region.
    #[must_use]
    pub fn region(region_id: impl Into<String>) -> Self {
        Self::default().with_region(region_id)
    }

    /// Scope targeting data of one squadron.
    #[must_use]
    pub fn squadron(squadron_id: impl Into<String>) -> Self {
        Self::default().with_squadron(squadron_id)
    }

    /// Scope targeting data of one cadet.
    #[must_use]
    pub fn cadet(cadet_id: impl Into<String>) -> Self {
        Self::default().with_cadet(cadet_id)
    }

    /// Adds a region dimension.
    #[must_use]
    pub fn with_region(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    /// Adds a squadron dimension.
    #[must_use]
    pub fn with_squadron(mut self, squadron_id: impl Into<String>) -> Self {
        self.squadron_id = Some(squadron_id.into());
        self
    }

    /// Adds a cadet dimension.
    #[must_use]
    pub fn with_cadet(mut self, cadet_id: impl Into<String>) -> Self {
        self.cadet_id = Some(cadet_id.into());
        self
    }

    /// Returns whether no dimension is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.region_id.is_none() && self.squadron_id.is_none() && self.cadet_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceScope;

    #[test]
    fn builders_set_only_requested_dimensions() {
        let scope = ResourceScope::region("REG-NE").with_squadron("SQ-101");
        assert_eq!(scope.region_id.as_deref(), Some("REG-NE"));
        assert_eq!(scope.squadron_id.as_deref(), Some("SQ-101"));
        assert!(scope.cadet_id.is_none());
        assert!(!scope.is_empty());
        assert!(ResourceScope::default().is_empty());
    }

    #[test]
    fn missing_fields_deserialize_as_unset() {
        let scope: ResourceScope =
            serde_json::from_str(r#"{"cadet_id":"u-009"}"#).unwrap_or_default();
        assert_eq!(scope, ResourceScope::cadet("u-009"));
    }
}
