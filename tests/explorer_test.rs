use adb_explorer::services::adb::{CommandExecutor, DeviceCommand, PowerAction};
use adb_explorer::services::explorer::session::Session;
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers listings from a fixed table and records every command it sees.
#[derive(Default)]
struct FakeDevice {
    listings: HashMap<String, String>,
    packages: String,
    log: Mutex<Vec<DeviceCommand>>,
}

impl FakeDevice {
    fn with_listing(mut self, path: &str, output: &str) -> Self {
        self.listings.insert(path.to_string(), output.to_string());
        self
    }

    fn commands(&self) -> Vec<DeviceCommand> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl CommandExecutor for FakeDevice {
    fn execute(&self, command: &DeviceCommand) -> String {
        if let Ok(mut log) = self.log.lock() {
            log.push(command.clone());
        }
        match command {
            DeviceCommand::List { path } => self.listings.get(path).cloned().unwrap_or_default(),
            DeviceCommand::ListPackages => self.packages.clone(),
            _ => String::new(),
        }
    }
}

fn device() -> FakeDevice {
    FakeDevice::default()
        .with_listing("/", "sdcard@\nsystem/\ninit.rc")
        .with_listing("/sdcard", "DCIM/\nDownload/\nfoo/")
        .with_listing("/sdcard/DCIM", "Camera/")
        .with_listing("/sdcard/DCIM/Camera", "IMG_0001.jpg")
}

fn list(path: &str) -> DeviceCommand {
    DeviceCommand::List { path: path.into() }
}

fn index_of(session: &Session<FakeDevice>, name: &str) -> usize {
    session
        .explorer()
        .entries()
        .iter()
        .position(|e| e.name == name)
        .unwrap_or_else(|| panic!("{name} not listed"))
}

#[test]
fn descend_and_back_scenario() {
    let mut session = Session::new(device(), "/");
    session.start();

    let ix = index_of(&session, "sdcard");
    assert!(session.open(ix));
    assert_eq!(session.explorer().navigation().paths(), ["/", "/sdcard"]);

    assert!(session.back());
    assert_eq!(session.explorer().navigation().paths(), ["/"]);
    assert_eq!(session.explorer().entries().len(), 3);
    assert_eq!(session.executor().commands().last(), Some(&list("/")));
}

#[test]
fn back_restores_previous_path_at_any_depth() {
    let mut session = Session::new(device(), "/");
    session.start();
    let chain = ["sdcard", "DCIM", "Camera"];
    let mut visited = vec!["/".to_string()];
    for name in chain {
        let ix = index_of(&session, name);
        session.open(ix);
        visited.push(session.explorer().current_path().to_string());
    }
    assert_eq!(session.explorer().current_path(), "/sdcard/DCIM/Camera");

    while visited.len() > 1 {
        visited.pop();
        assert!(session.back());
        assert_eq!(session.explorer().current_path(), visited.last().unwrap());
    }
    assert!(!session.back());
    assert_eq!(session.explorer().navigation().depth(), 1);
}

#[test]
fn files_are_not_descended_into() {
    let mut session = Session::new(device(), "/");
    session.start();
    let before = session.executor().commands().len();
    let ix = index_of(&session, "init.rc");
    assert!(!session.open(ix));
    assert_eq!(session.executor().commands().len(), before);
}

#[test]
fn empty_output_renders_nothing() {
    let mut session = Session::new(device(), "/");
    session.start();
    session.list_directory("/data");
    assert!(session.explorer().entries().is_empty());
}

#[test]
fn copy_then_paste_targets_current_directory() {
    let mut session = Session::new(device(), "/sdcard/DCIM");
    session.start();
    let clipboard = session.copy(index_of(&session, "Camera")).unwrap();
    assert_eq!(clipboard, "/sdcard/DCIM/Camera");

    session.list_directory("/sdcard/Download");
    assert!(session.paste(&clipboard));

    let commands = session.executor().commands();
    let copy = DeviceCommand::Copy {
        from: "/sdcard/DCIM/Camera".into(),
        to: "/sdcard/Download/Camera".into(),
    };
    let at = commands.iter().position(|c| c == &copy).expect("cp issued");
    assert_eq!(commands.get(at + 1), Some(&list("/sdcard/Download")));
}

#[test]
fn delete_scenario() {
    let mut session = Session::new(device(), "/sdcard");
    session.start();
    let before = session.executor().commands().len();

    assert!(session.delete(index_of(&session, "foo")));

    let commands = session.executor().commands();
    assert_eq!(
        &commands[before..],
        [
            DeviceCommand::RemoveDir {
                path: "/sdcard/foo".into()
            },
            DeviceCommand::RemoveRecursive {
                path: "/sdcard/foo".into()
            },
        ]
    );
    let names: Vec<_> = session
        .explorer()
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["DCIM", "Download"]);
}

#[test]
fn non_numeric_permissions_issue_nothing() {
    let mut session = Session::new(device(), "/sdcard");
    session.start();
    let before = session.executor().commands().len();
    let ix = index_of(&session, "foo");

    assert!(!session.change_permissions(ix, "u+x"));
    assert_eq!(session.executor().commands().len(), before);

    assert!(session.change_permissions(ix, "755"));
    assert_eq!(
        session.executor().commands().last(),
        Some(&DeviceCommand::Chmod {
            mode: "755".into(),
            path: "/sdcard/foo".into()
        })
    );
}

#[test]
fn rename_updates_label_without_relisting() {
    let mut session = Session::new(device(), "/sdcard");
    session.start();
    let before = session.executor().commands().len();

    assert!(session.rename(index_of(&session, "foo"), "bar"));

    assert_eq!(session.executor().commands().len(), before + 1);
    assert_eq!(index_of(&session, "bar"), 2);
}

#[test]
fn power_and_root_check() {
    let mut device = device();
    device.packages = "package:com.android.phone\npackage:eu.chainfire.supersu\n".into();
    let session = Session::new(device, "/");

    session.power(PowerAction::RebootRecovery);
    assert_eq!(
        session.executor().commands(),
        [DeviceCommand::Power(PowerAction::RebootRecovery)]
    );

    let status = session.root_status();
    assert!(status.rooted);
    assert_eq!(status.label(), "Rooted with: SuperSU");
}
