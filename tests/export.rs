#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use listo::libs::export::{ExportFormat, ExportTask, Exporter};
    use listo::libs::task::{Priority, Task};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: 1,
                title: "Stand-up".to_string(),
                category: "Work".to_string(),
                due_date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(9, 0, 0),
                notes: None,
                flagged: true,
                done: false,
                priority: Priority::clamped(1),
            },
            Task {
                id: 2,
                title: "Gym".to_string(),
                category: "Health".to_string(),
                due_date: None,
                notes: Some("Leg day".to_string()),
                flagged: false,
                done: false,
                priority: Priority::default(),
            },
        ]
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("today.json");
        let now = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(8, 0, 0).unwrap();

        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()), "Today");
        assert_eq!(exporter.export(&sample_tasks(), now).unwrap(), path);

        let rows: Vec<ExportTask> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].due, "Today, 09:00");
        assert_eq!(rows[0].due_date, "2026-10-16 09:00:00");
        assert_eq!(rows[0].priority, 1);
        assert_eq!(rows[1].notes, "Leg day");
        assert_eq!(rows[1].due, "");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("all.csv");
        let now = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();

        Exporter::new(ExportFormat::Csv, Some(path.clone()), "All")
            .export(&sample_tasks(), now)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,title,list,due_date,due,notes,flagged,done,priority"));
        assert_eq!(lines.next(), Some("1,Stand-up,Work,2026-10-16 09:00:00,\"Tomorrow, 09:00\",,true,false,1"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Json, None, "Home Office");
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("listo_home_office_"));
        assert!(name.ends_with(".json"));
    }
}
