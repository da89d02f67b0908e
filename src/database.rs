/// The salsa database backing expression resolution.
///
/// Interned lists, tokens and expressions live here, so values from one
/// database must not be mixed with another.
#[derive(Default, Clone)]
#[salsa::db]
pub struct TylistDatabase {
    storage: salsa::Storage<Self>,
}

#[salsa::db]
impl salsa::Database for TylistDatabase {}
