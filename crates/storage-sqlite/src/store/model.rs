//! Database model for the app key-value store.

use diesel::prelude::*;

/// Database model for app store key-value pairs.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_store)]
pub struct StoreEntryDB {
    pub store_key: String,
    pub store_value: String,
}
