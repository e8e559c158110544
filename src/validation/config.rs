use std::str::FromStr;

/// How `$ref` nodes are dereferenced before keyword checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefPolicy {
    /// Follow one pointer per dispatch; a chained target is resolved on the next dispatch
    SingleHop,
    /// Follow pointers until a node without `$ref` is reached
    #[default]
    Transitive,
}

impl FromStr for RefPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single-hop" | "single_hop" | "single" => Ok(RefPolicy::SingleHop),
            "transitive" => Ok(RefPolicy::Transitive),
            other => Err(format!("unknown $ref policy: {}", other)),
        }
    }
}

/// When a property declared in `properties` counts as present in the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyPresence {
    /// Any existing key is validated, including `0`, `false`, `""` and `null`
    #[default]
    Present,
    /// Only truthy values are validated; falsy values are treated as absent
    Truthy,
}

impl FromStr for PropertyPresence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" => Ok(PropertyPresence::Present),
            "truthy" => Ok(PropertyPresence::Truthy),
            other => Err(format!("unknown property presence mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub ref_policy: RefPolicy,
    /// Evaluate `allOf` / `anyOf` / `oneOf`. When off, a schema carrying only
    /// combinators falls through to the object validator.
    pub combinators: bool,
    pub property_presence: PropertyPresence,
    /// Maximum dispatcher nesting before validation aborts with a schema error
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            ref_policy: RefPolicy::default(),
            combinators: true,
            property_presence: PropertyPresence::default(),
            max_depth: 128,
        }
    }
}

impl ValidatorConfig {
    /// Compatibility settings reproducing single-hop refs, combinator
    /// fall-through and truthy property presence.
    pub fn compat() -> Self {
        Self {
            ref_policy: RefPolicy::SingleHop,
            combinators: false,
            property_presence: PropertyPresence::Truthy,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            ref_policy: parse_var(&lookup, "OASGUARD_REF_POLICY", defaults.ref_policy),
            combinators: parse_var(&lookup, "OASGUARD_COMBINATORS", defaults.combinators),
            property_presence: parse_var(
                &lookup,
                "OASGUARD_PROPERTY_PRESENCE",
                defaults.property_presence,
            ),
            max_depth: parse_var(&lookup, "OASGUARD_MAX_DEPTH", defaults.max_depth),
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = lookup(name) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}, using default {:?}", name, raw, default);
            default
        }
    }
}
