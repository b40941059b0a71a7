//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use super::EngineConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path for `EngineConfig`.
///
/// Maintained by hand against engine_config.rs; a new field must be added here.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        // [retrieval]
        "retrieval",
        "retrieval.default_top_k",
        "retrieval.search_pool_size",
        "retrieval.keyword_matching",
        "retrieval.boost_per_match",
        "retrieval.max_category_boost",
        // [cache]
        "cache",
        "cache.enabled",
        "cache.max_entries",
        "cache.ttl_seconds",
        // [response]
        "response",
        "response.information_preview_chars",
        "response.strategy_preview_chars",
        "response.solution_preview_chars",
        "response.max_key_themes",
        // [server]
        "server",
        "server.addr",
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// A table `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Closest known key within edit distance 3. Ties go to the alphabetically
/// first key so suggestions are stable across runs.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails: a TOML syntax error is left for serde to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Check value ranges on a parsed config.
///
/// Returns (errors, warnings). Errors are values the engine cannot run with;
/// warnings are legal but probably unintended.
pub fn validate_ranges(config: &EngineConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let r = &config.retrieval;
    if r.default_top_k == 0 {
        errors.push("retrieval.default_top_k must be > 0".to_string());
    }
    if r.search_pool_size < r.default_top_k {
        errors.push(format!(
            "retrieval.search_pool_size ({}) must be >= retrieval.default_top_k ({})",
            r.search_pool_size, r.default_top_k
        ));
    }
    if !r.boost_per_match.is_finite() || r.boost_per_match < 0.0 {
        errors.push(format!(
            "retrieval.boost_per_match = {} must be a finite value >= 0",
            r.boost_per_match
        ));
    }
    if !r.max_category_boost.is_finite() || !(0.0..=1.0).contains(&r.max_category_boost) {
        errors.push(format!(
            "retrieval.max_category_boost = {} must be within [0, 1]",
            r.max_category_boost
        ));
    } else if r.max_category_boost == 0.0 || r.boost_per_match == 0.0 {
        warnings.push(ValidationWarning {
            field: "retrieval.max_category_boost".to_string(),
            message: "Category boost is disabled; ranking uses cosine similarity only".to_string(),
            suggestion: None,
        });
    }

    let c = &config.cache;
    if c.enabled {
        if c.max_entries == 0 {
            errors.push("cache.max_entries must be > 0 when the cache is enabled".to_string());
        }
        if c.ttl_seconds == 0 {
            errors.push("cache.ttl_seconds must be > 0 when the cache is enabled".to_string());
        }
    } else {
        warnings.push(ValidationWarning {
            field: "cache.enabled".to_string(),
            message: "Query caching is disabled; every request recomputes its ranking".to_string(),
            suggestion: None,
        });
    }

    let p = &config.response;
    for (name, value) in [
        ("response.information_preview_chars", p.information_preview_chars),
        ("response.strategy_preview_chars", p.strategy_preview_chars),
        ("response.solution_preview_chars", p.solution_preview_chars),
        ("response.max_key_themes", p.max_key_themes),
    ] {
        if value == 0 {
            errors.push(format!("{name} must be > 0"));
        }
    }

    if config.server.addr.parse::<std::net::SocketAddr>().is_err() {
        warnings.push(ValidationWarning {
            field: "server.addr".to_string(),
            message: format!(
                "server.addr '{}' is not an IP:port pair; it will be resolved at bind time",
                config.server.addr
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}
