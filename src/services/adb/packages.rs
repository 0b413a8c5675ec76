use super::command::DeviceCommand;
use super::executor::CommandExecutor;
use serde::Serialize;

/// Package ids of root managers and the names shown for them.
pub const ROOT_MANAGERS: [(&str, &str); 2] = [
    ("com.topjohnwu.magisk", "Magisk"),
    ("eu.chainfire.supersu", "SuperSU"),
];

/// Extracts package ids from `pm list packages` output (`package:<id>` per
/// line). Blank lines and lines without a colon are skipped.
pub fn parse_packages(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(_, id)| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

pub fn installed_packages(executor: &dyn CommandExecutor) -> Vec<String> {
    parse_packages(&executor.execute(&DeviceCommand::ListPackages))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootStatus {
    pub rooted: bool,
    pub managers: Vec<String>,
}

impl RootStatus {
    pub fn from_packages(packages: &[String]) -> Self {
        let managers: Vec<String> = ROOT_MANAGERS
            .iter()
            .filter(|(id, _)| packages.iter().any(|p| p == id))
            .map(|(_, name)| name.to_string())
            .collect();
        Self {
            rooted: !managers.is_empty(),
            managers,
        }
    }

    pub fn label(&self) -> String {
        if self.rooted {
            format!("Rooted with: {}", self.managers.join(" "))
        } else {
            "Not Rooted".to_string()
        }
    }
}

pub fn check_root(executor: &dyn CommandExecutor) -> RootStatus {
    RootStatus::from_packages(&installed_packages(executor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::adb::executor::MockCommandExecutor;
    use mockall::predicate::eq;

    #[test]
    fn parses_ids_after_the_colon() {
        let out = "package:com.android.settings\n\npackage:com.topjohnwu.magisk\ngarbage\n";
        assert_eq!(
            parse_packages(out),
            vec!["com.android.settings", "com.topjohnwu.magisk"]
        );
    }

    #[test]
    fn lists_every_known_manager() {
        let packages = vec![
            "eu.chainfire.supersu".to_string(),
            "com.topjohnwu.magisk".to_string(),
        ];
        let status = RootStatus::from_packages(&packages);
        assert!(status.rooted);
        assert_eq!(status.label(), "Rooted with: Magisk SuperSU");
    }

    #[test]
    fn no_manager_means_not_rooted() {
        let status = RootStatus::from_packages(&["com.android.chrome".to_string()]);
        assert!(!status.rooted);
        assert_eq!(status.label(), "Not Rooted");
    }

    #[test]
    fn check_root_queries_package_manager() {
        let mut exec = MockCommandExecutor::new();
        exec.expect_execute()
            .with(eq(DeviceCommand::ListPackages))
            .times(1)
            .returning(|_| "package:com.topjohnwu.magisk".to_string());
        let status = check_root(&exec);
        assert_eq!(status.managers, vec!["Magisk"]);
    }

    #[test]
    fn failed_query_reads_as_not_rooted() {
        let mut exec = MockCommandExecutor::new();
        exec.expect_execute().returning(|_| String::new());
        assert!(!check_root(&exec).rooted);
    }
}
