use super::filter::ViewSelector;
use super::formatter::{format_progress, FormattedTask};
use super::summary::Progress;
use super::task::Task;
use chrono::NaiveDateTime;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], now: NaiveDateTime) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "LIST", "DUE", "NOTES"]);
        for task in tasks {
            let formatted = FormattedTask::from_task(task, now);
            table.add_row(row![formatted.id, formatted.title, formatted.list, formatted.due, formatted.notes]);
        }
        table.printstd();
    }

    pub fn lists(counts: &BTreeMap<String, usize>) {
        let mut table = Table::new();

        table.add_row(row!["LIST", "PENDING"]);
        for (name, count) in counts {
            table.add_row(row![name, count]);
        }
        table.printstd();
    }

    pub fn progress(progress: &Progress) {
        let mut table = Table::new();

        table.add_row(row!["DONE", "PENDING", "TOTAL", "PROGRESS"]);
        table.add_row(row![progress.done, progress.pending, progress.total(), format_progress(progress, 20)]);
        table.printstd();
    }

    pub fn views(counts: &[(ViewSelector, usize)]) {
        let mut table = Table::new();

        table.add_row(row!["VIEW", "TASKS"]);
        for (selector, count) in counts {
            table.add_row(row![selector.title(), count]);
        }
        table.printstd();
    }
}
