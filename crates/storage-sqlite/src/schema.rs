diesel::table! {
    app_store (store_key) {
        store_key -> Text,
        store_value -> Text,
    }
}
