//! BOM Resolver
//!
//! Selects the single authoritative BOM header for a product among the
//! active candidates.

use fabrica_models::BomHeader;

/// Resolver for the one authoritative BOM of a product.
///
/// The store may hold several active headers for the same product (the
/// active flag carries no uniqueness constraint). Resolution prefers the
/// highest version, then the most recently created header, then the
/// highest id, and never depends on the order rows were read in.
#[derive(Debug, Default)]
pub struct BomResolver;

impl BomResolver {
    pub fn new() -> Self {
        Self
    }

    /// Pick the authoritative header among the candidates. Inactive
    /// headers are ignored; `None` means the product has no active BOM.
    pub fn resolve<'a>(&self, headers: &'a [BomHeader]) -> Option<&'a BomHeader> {
        headers
            .iter()
            .filter(|header| header.is_active)
            .max_by_key(|header| (header.version, header.created_at, header.id))
    }
}
