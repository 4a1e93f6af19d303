#[cfg(test)]
mod tests {
    use listo::db::db::DB_FILE_NAME;
    use listo::db::store::SchemaPolicy;
    use listo::db::task_file::TASKS_FILE_NAME;
    use listo::libs::config::{Backend, Config, CONFIG_FILE_NAME};
    use listo::libs::data_storage::DataStorage;
    use listo::libs::task::NewTask;
    use listo::libs::workspace::Workspace;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path())
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(config.backend, Backend::Csv);
        assert_eq!(config.schema_policy, SchemaPolicy::Reset);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        Config::new(Backend::Sqlite, SchemaPolicy::Migrate).in_dir(&ctx.storage()).save().unwrap();

        let content = fs::read_to_string(ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(content.contains("\"sqlite\""));
        assert!(content.contains("\"migrate\""));

        let config = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(config.schema_policy, SchemaPolicy::Migrate);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), r#"{ "backend": "sqlite" }"#).unwrap();

        let config = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(config.backend, Backend::Sqlite);
        assert_eq!(config.schema_policy, SchemaPolicy::Reset);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), r#"{ "backend": "paper" }"#).unwrap();
        assert!(Config::read_from(&ctx.storage()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_store_follows_backend(ctx: &mut ConfigTestContext) {
        for (backend, file_name) in [(Backend::Csv, TASKS_FILE_NAME), (Backend::Sqlite, DB_FILE_NAME)] {
            let config = Config::new(backend, SchemaPolicy::Reset).in_dir(&ctx.storage());
            let store = config.open_store().unwrap();
            assert_eq!(store.location(), ctx.temp_dir.path().join(file_name));

            let mut workspace = Workspace::load(store).unwrap();
            workspace.create_task(NewTask::new("Buy milk", "Errands")).unwrap();
            assert!(ctx.temp_dir.path().join(file_name).exists());
        }
    }
}
