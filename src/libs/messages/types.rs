#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    NothingToUpdate,
    TimeNeedsDate,
    ConfirmDeleteTask(String),
    DeleteCancelled,
    ViewHeader(String, usize),
    NoTasksInView(String),
    OperationFailed(String),

    // === LIST MESSAGES ===
    ListCreated(String),
    ListRenamed(String, String),
    ListDeleted(String, usize),
    ListsHeader,
    NoListsFound,
    ConfirmDeleteList(String),

    // === SUMMARY MESSAGES ===
    ProgressHeader,
    SmartViewsHeader,
    NoTasksYet,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    StorageLocation(String),
    BackendChanged(String),

    // === DATABASE MESSAGES ===
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
}
