//! # Catalog Configuration
//!
//! Named products and shipping methods the CLI can quote against.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRICER_DEFAULT_SHIPPING=standard                                   │
//! │                                                                         │
//! │  2. TOML Catalog File, first of:                                       │
//! │     --catalog <PATH>                                                   │
//! │     PRICER_CATALOG=<PATH>                                              │
//! │     ~/.config/order-pricer/catalog.toml (Linux)                        │
//! │     ~/Library/Application Support/com.order-pricer.pricer/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     empty catalog, no default shipping method                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog File Format
//! ```toml
//! default_shipping = "standard"
//!
//! [products.WIDGET]
//! base_price_cents = 1000
//! discount_threshold = 1      # omit for no volume discount
//! discount_rate_bps = 1000    # 10% per unit above the threshold
//!
//! [shipping.standard]
//! discount_threshold_cents = 10000   # omit to always charge fee_per_case
//! discount_fee_cents = 50
//! fee_per_case_cents = 100
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pricer_core::validation::{validate_product, validate_shipping_method, validate_sku};
use pricer_core::{CoreError, Product, ShippingMethod, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Env var naming the catalog file.
pub const CATALOG_PATH_ENV: &str = "PRICER_CATALOG";

/// Env var overriding `default_shipping`.
pub const DEFAULT_SHIPPING_ENV: &str = "PRICER_DEFAULT_SHIPPING";

/// Product and shipping catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Shipping method used when none is requested.
    #[serde(default)]
    pub default_shipping: Option<String>,

    /// Products keyed by SKU.
    #[serde(default)]
    pub products: BTreeMap<String, Product>,

    /// Shipping methods keyed by name.
    #[serde(default)]
    pub shipping: BTreeMap<String, ShippingMethod>,
}

impl Catalog {
    /// Loads the catalog from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Catalog file
    /// 3. Environment variables
    ///
    /// A path given explicitly (argument or `PRICER_CATALOG`) must exist.
    /// A missing file at the platform default path yields an empty catalog.
    pub fn load(catalog_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = catalog_path.or_else(|| std::env::var_os(CATALOG_PATH_ENV).map(PathBuf::from));

        let mut catalog = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::CatalogNotFound(path));
                }
                Self::read(&path)?
            }
            None => match Self::default_catalog_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                path => {
                    debug!(?path, "Catalog file not found, using empty catalog");
                    Self::default()
                }
            },
        };

        catalog.apply_env_overrides();
        catalog.validate()?;

        Ok(catalog)
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn read(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading catalog from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validates every entry, naming the first one that fails.
    pub fn validate(&self) -> CliResult<()> {
        for (sku, product) in &self.products {
            // Lookups trim the requested SKU, so a padded key could never match.
            validate_sku(sku)
                .and_then(|_| validate_trimmed_key(sku))
                .and_then(|_| validate_product(product))
                .map_err(|e| invalid_entry(format!("products.{sku}"), e.into()))?;
        }

        for (name, method) in &self.shipping {
            validate_shipping_method(method)
                .map_err(|e| invalid_entry(format!("shipping.{name}"), e.into()))?;
        }

        if let Some(name) = &self.default_shipping {
            if !self.shipping.contains_key(name) {
                return Err(CliError::UnknownShippingMethod(name.clone()));
            }
        }

        Ok(())
    }

    /// Looks up a product by SKU.
    pub fn product(&self, sku: &str) -> CliResult<&Product> {
        self.products
            .get(sku.trim())
            .ok_or_else(|| CliError::UnknownProduct(sku.to_string()))
    }

    /// Looks up a shipping method, falling back to `default_shipping`.
    ///
    /// Returns the resolved name alongside the method.
    pub fn shipping_method<'a>(&'a self, name: Option<&'a str>) -> CliResult<(&'a str, &'a ShippingMethod)> {
        let name = name
            .or(self.default_shipping.as_deref())
            .ok_or(CliError::NoShippingMethod)?;

        self.shipping
            .get(name)
            .map(|method| (name, method))
            .ok_or_else(|| CliError::UnknownShippingMethod(name.to_string()))
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(name) = var(DEFAULT_SHIPPING_ENV) {
            debug!(shipping = %name, "Overriding default shipping method from environment");
            self.default_shipping = Some(name);
        }
    }

    /// Returns the default catalog file path.
    fn default_catalog_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "order-pricer", "pricer")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}

fn validate_trimmed_key(sku: &str) -> Result<(), ValidationError> {
    if sku != sku.trim() {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must not have leading or trailing whitespace".to_string(),
        });
    }
    Ok(())
}

fn invalid_entry(entry: String, source: CoreError) -> CliError {
    CliError::InvalidEntry { entry, source }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::{Money, Threshold};
    use std::io::Write;

    const SAMPLE: &str = r#"
default_shipping = "standard"

[products.WIDGET]
base_price_cents = 1000
discount_threshold = 1
discount_rate_bps = 1000

[products.GADGET]
base_price_cents = 2500

[shipping.standard]
fee_per_case_cents = 100

[shipping.bulk]
discount_threshold_cents = 10000
discount_fee_cents = 50
fee_per_case_cents = 100
"#;

    #[test]
    fn test_parse_sample_catalog() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();

        let widget = catalog.product("WIDGET").unwrap();
        assert_eq!(widget.base_price(), Money::from_cents(1000));
        assert_eq!(widget.discount_threshold, Threshold::At(1));
        assert_eq!(widget.discount_rate_bps, 1000);

        let gadget = catalog.product("GADGET").unwrap();
        assert_eq!(gadget.discount_threshold, Threshold::Unbounded);

        let (_, bulk) = catalog.shipping_method(Some("bulk")).unwrap();
        assert_eq!(bulk.discount_threshold(), Threshold::At(Money::from_cents(10_000)));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_shipping_falls_back_to_default() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let (name, method) = catalog.shipping_method(None).unwrap();
        assert_eq!(name, "standard");
        assert_eq!(method.fee_per_case(), Money::from_cents(100));
    }

    #[test]
    fn test_lookup_errors() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        assert!(matches!(catalog.product("NOPE"), Err(CliError::UnknownProduct(_))));
        assert!(matches!(
            catalog.shipping_method(Some("express")),
            Err(CliError::UnknownShippingMethod(_))
        ));
        assert!(matches!(
            Catalog::default().shipping_method(None),
            Err(CliError::NoShippingMethod)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_product() {
        let catalog = Catalog::from_toml_str(
            r#"
[products.FREEBIE]
base_price_cents = 0
"#,
        )
        .unwrap();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CliError::InvalidEntry { ref entry, .. } if entry == "products.FREEBIE"));
    }

    #[test]
    fn test_validate_rejects_bad_sku() {
        let catalog = Catalog::from_toml_str(
            r#"
[products."has space"]
base_price_cents = 100
"#,
        )
        .unwrap();
        assert!(matches!(catalog.validate(), Err(CliError::InvalidEntry { .. })));
    }

    #[test]
    fn test_validate_rejects_padded_sku_key() {
        let catalog = Catalog::from_toml_str(
            r#"
[products." WIDGET"]
base_price_cents = 100
"#,
        )
        .unwrap();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidEntry {
                ref entry,
                source: CoreError::Validation(ValidationError::InvalidFormat { .. }),
            } if entry == "products. WIDGET"
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_default_shipping() {
        let catalog = Catalog::from_toml_str(r#"default_shipping = "express""#).unwrap();
        assert!(matches!(catalog.validate(), Err(CliError::UnknownShippingMethod(_))));
    }

    #[test]
    fn test_env_override_default_shipping() {
        let mut catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        catalog.apply_overrides(|key| (key == DEFAULT_SHIPPING_ENV).then(|| "bulk".to_string()));
        assert_eq!(catalog.default_shipping.as_deref(), Some("bulk"));

        let mut untouched = Catalog::from_toml_str(SAMPLE).unwrap();
        untouched.apply_overrides(|_| None);
        assert_eq!(untouched.default_shipping.as_deref(), Some("standard"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            Catalog::from_toml_str("[products.WIDGET]\nbase_price_cents = \"ten\""),
            Err(CliError::Parse(_))
        ));
    }

    #[test]
    fn test_read_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::read(file.path()).unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.shipping.len(), 2);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Catalog::load(Some(missing)),
            Err(CliError::CatalogNotFound(_))
        ));
    }
}
