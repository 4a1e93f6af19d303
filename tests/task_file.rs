#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use listo::db::store::{SchemaPolicy, TaskStore};
    use listo::db::task_file::{TaskFile, TASKS_FILE_NAME};
    use listo::libs::task::{NewTask, Priority, Task, MAX_ID};
    use listo::libs::workspace::Workspace;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const HEADER: &str = "id,title,category,due_date,notes,flagged,done,priority\n";

    struct FileTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FileTestContext {
        fn setup() -> Self {
            FileTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl FileTestContext {
        fn path(&self) -> PathBuf {
            self.temp_dir.path().join(TASKS_FILE_NAME)
        }

        fn write(&self, content: &str) {
            fs::write(self.path(), content).unwrap();
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: 1,
                title: "Pay rent, before noon".to_string(),
                category: "Home".to_string(),
                due_date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(9, 0, 0),
                notes: Some("Bank \"transfer\"".to_string()),
                flagged: true,
                done: false,
                priority: Priority::clamped(2),
            },
            Task::phantom(2, "Groceries"),
            Task {
                id: 3,
                title: "Buy milk".to_string(),
                category: "Errands".to_string(),
                due_date: None,
                notes: None,
                flagged: false,
                done: true,
                priority: Priority::default(),
            },
        ]
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_missing_file_is_empty(ctx: &mut FileTestContext) {
        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        assert!(store.load_all().unwrap().is_empty());
        assert!(!ctx.path().exists());
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_empty_file_is_empty(ctx: &mut FileTestContext) {
        ctx.write("");
        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_save_and_load(ctx: &mut FileTestContext) {
        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        store.save_all(&sample_tasks()).unwrap();

        let content = fs::read_to_string(ctx.path()).unwrap();
        assert!(content.starts_with(HEADER));
        assert!(content.contains("2026-10-16 09:00:00"));

        let loaded = TaskFile::new(ctx.path(), SchemaPolicy::Reset).load_all().unwrap();
        assert_eq!(loaded, sample_tasks());
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_save_leaves_no_temporary_files(ctx: &mut FileTestContext) {
        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        store.save_all(&sample_tasks()).unwrap();
        store.save_all(&[]).unwrap();

        let entries: Vec<_> = fs::read_dir(ctx.temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), HEADER);
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_missing_required_column_resets(ctx: &mut FileTestContext) {
        ctx.write("id,title,category,flagged,done\n1,Old task,Home,false,false\n");

        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        assert!(store.load_all().unwrap().is_empty());
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), HEADER);
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_missing_required_column_migrates(ctx: &mut FileTestContext) {
        ctx.write("id,title,category,flagged,done\n1,Old task,Home,false,false\n");

        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Migrate);
        let tasks = store.load_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Old task");
        assert_eq!(tasks[0].due_date, None);

        // The next save writes the full layout
        store.save_all(&tasks).unwrap();
        assert!(fs::read_to_string(ctx.path()).unwrap().starts_with(HEADER));
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_older_layout_without_optional_columns(ctx: &mut FileTestContext) {
        ctx.write("id,title,category,due_date,flagged,done\n1,Pay rent,Home,2026-10-16 09:00:00,True,False\n");

        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        let tasks = store.load_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].flagged);
        assert!(!tasks[0].done);
        assert_eq!(tasks[0].notes, None);
        assert_eq!(tasks[0].priority.value(), 0);
        assert_eq!(tasks[0].due_date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(9, 0, 0));
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_malformed_values_are_normalized(ctx: &mut FileTestContext) {
        ctx.write(&format!(
            "{}1,Pay rent,,not a date,,maybe,1,2.0\n1,Duplicate,Home,,,0,0,9\n",
            HEADER
        ));

        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        let tasks = store.load_all().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].category, "Uncategorized");
        assert_eq!(tasks[0].due_date, None);
        assert!(!tasks[0].flagged);
        assert!(tasks[0].done);
        assert_eq!(tasks[0].priority.value(), 2);
        // Duplicate ids get a fresh one, out-of-range priority is clamped
        assert_eq!(tasks[1].id, 2);
        assert_eq!(tasks[1].priority.value(), 3);
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_out_of_range_ids_are_reassigned(ctx: &mut FileTestContext) {
        ctx.write(&format!(
            "{}9223372036854775807,Big,Home,,,false,false,0\n-4,Negative,Home,,,false,false,0\n7,Normal,Home,,,false,false,0\n",
            HEADER
        ));

        let mut store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        let tasks = store.load_all().unwrap();
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![8, 9, 7]);
        assert_eq!(store.next_id(&tasks), 10);
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_huge_id_does_not_break_allocation(ctx: &mut FileTestContext) {
        ctx.write(&format!("{}9223372036854775807,Big,Home,,,false,false,0\n", HEADER));

        let store = TaskFile::new(ctx.path(), SchemaPolicy::Reset);
        let mut workspace = Workspace::load(Box::new(store)).unwrap();
        let task = workspace.create_task(NewTask::new("Small", "Home")).unwrap();
        assert!(task.id > 0);
        assert!(workspace.tasks().iter().all(|t| t.id > 0 && t.id < MAX_ID));
    }
}
