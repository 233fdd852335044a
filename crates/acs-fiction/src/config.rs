//! Engine configuration.

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// RNG seed for reproducible dice; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Describe rooms in full on every visit, not just the first.
    pub verbose_rooms: bool,
    /// Tell the player when a misspelled word was corrected.
    pub echo_corrections: bool,
    /// Maximum number of companions.
    pub max_party: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            verbose_rooms: false,
            echo_corrections: true,
            max_party: 3,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Describe rooms in full on every visit.
    pub fn with_verbose_rooms(mut self, verbose: bool) -> Self {
        self.verbose_rooms = verbose;
        self
    }

    /// Show or hide spelling-correction notes.
    pub fn with_echo_corrections(mut self, echo: bool) -> Self {
        self.echo_corrections = echo;
        self
    }

    /// Set the party size limit.
    pub fn with_max_party(mut self, max: usize) -> Self {
        self.max_party = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, None);
        assert!(!cfg.verbose_rooms);
        assert!(cfg.echo_corrections);
        assert_eq!(cfg.max_party, 3);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(123)
            .with_verbose_rooms(true)
            .with_echo_corrections(false)
            .with_max_party(1);
        assert_eq!(cfg.seed, Some(123));
        assert!(cfg.verbose_rooms);
        assert!(!cfg.echo_corrections);
        assert_eq!(cfg.max_party, 1);
    }
}
