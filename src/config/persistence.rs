//! Preference persistence configuration

pub struct PersistenceConfig {
    /// Key under which the last selected currency is stored
    pub preference_key: &'static str,
    /// Default JSON file backing the preference store on native builds
    pub preferences_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    preference_key: "preferred_currency",
    preferences_path: ".preferences.json",
};
