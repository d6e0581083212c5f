use bitflags::bitflags;

bitflags! {
    /// Opt-in markers a type declares about itself.
    ///
    /// These mirror the marker traits at runtime, where only a `dyn Object` is available.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u8 {
        /// The type is an entity eligible for view-model projection.
        const NORMALIZABLE = 1 << 0;
        /// The type is a view-model that can be built from one entity.
        const VIEW_MODEL = 1 << 1;
        /// The value stands in for another object that is loaded on demand.
        const PROXY = 1 << 2;
    }
}

impl From<&str> for Capabilities {
    fn from(s: &str) -> Self {
        match s {
            "normalizable" => Self::NORMALIZABLE,
            "view_model" | "view-model" => Self::VIEW_MODEL,
            "proxy" => Self::PROXY,
            _ => Self::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marker_names() {
        assert_eq!(Capabilities::from("normalizable"), Capabilities::NORMALIZABLE);
        assert_eq!(Capabilities::from("view-model"), Capabilities::VIEW_MODEL);
        assert_eq!(Capabilities::from("unknown"), Capabilities::empty());
    }
}
