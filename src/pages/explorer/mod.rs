use crate::models::icons::IconSet;
use crate::services::adb::{CommandExecutor, DeviceCommand};
use crate::services::explorer::tasks::{ActionKind, InFlight};
use crate::services::explorer::{Explorer, Outcome};
use gpui::{
    actions, AnyElement, ClipboardItem, Context, FocusHandle, Focusable, IntoElement, Render,
    Task, Window,
};
use gpui_component::VirtualListScrollHandle;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info};

mod dialogs;
pub mod view;

actions!(
    adb_explorer,
    [
        CopyEntry,
        PasteEntry,
        DeleteEntry,
        RenameEntry,
        ChangePermissions,
        NewFolder
    ]
);

pub struct ExplorerPage {
    pub explorer: Explorer,
    pub executor: Arc<dyn CommandExecutor>,
    pub icons: Rc<IconSet>,
    pub tasks: InFlight<Task<()>>,
    pub selected_index: Option<usize>,
    /// Entry under the cursor when the context menu was opened.
    pub context_index: Option<usize>,
    pub virtual_scroll_handle: VirtualListScrollHandle,
    pub focus_handle: FocusHandle,
    pub focus_requested: bool,
}

impl Focusable for ExplorerPage {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ExplorerPage {
    pub fn new(
        root: String,
        executor: Arc<dyn CommandExecutor>,
        icons: Rc<IconSet>,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut page = Self {
            explorer: Explorer::new(root),
            executor,
            icons,
            tasks: InFlight::default(),
            selected_index: None,
            context_index: None,
            virtual_scroll_handle: VirtualListScrollHandle::new(),
            focus_handle: cx.focus_handle(),
            focus_requested: false,
        };
        let initial = page.explorer.refresh();
        page.run_listing(initial, cx);
        page
    }

    pub fn is_busy(&self) -> bool {
        self.tasks.is_busy()
    }

    /// Runs a listing on the background executor. A newer listing replaces
    /// (and so cancels) one still in flight.
    fn run_listing(&mut self, cmd: DeviceCommand, cx: &mut Context<Self>) {
        self.selected_index = None;
        self.context_index = None;
        let executor = self.executor.clone();
        let task = cx.spawn(async move |this, cx| {
            let request = cmd.clone();
            let output = cx
                .background_executor()
                .spawn(async move { executor.execute(&request) })
                .await;
            this.update(cx, |this, cx| {
                this.tasks.finish(ActionKind::Listing);
                if let DeviceCommand::List { path } = &cmd {
                    this.explorer.apply_listing(path, &output);
                }
                cx.notify();
            })
            .ok();
        });
        self.tasks.replace(ActionKind::Listing, task);
        cx.notify();
    }

    /// Runs `commands` in order on the background executor, then applies
    /// `outcome`. Ignored while an action of the same kind is running.
    fn dispatch(
        &mut self,
        kind: ActionKind,
        commands: Vec<DeviceCommand>,
        outcome: Option<Outcome>,
        cx: &mut Context<Self>,
    ) {
        let executor = self.executor.clone();
        let started = self.tasks.try_start(kind, || {
            cx.spawn(async move |this, cx| {
                cx.background_executor()
                    .spawn(async move {
                        for cmd in &commands {
                            executor.execute(cmd);
                        }
                    })
                    .await;
                this.update(cx, |this, cx| {
                    this.tasks.finish(kind);
                    if let Some(next) = outcome.and_then(|o| this.explorer.apply(&o)) {
                        this.run_listing(next, cx);
                    }
                    cx.notify();
                })
                .ok();
            })
        });
        if started {
            cx.notify();
        } else {
            debug!(?kind, "action already running, ignoring");
        }
    }

    pub fn list_directory(&mut self, path: String, cx: &mut Context<Self>) {
        let cmd = self.explorer.list_directory(path);
        self.run_listing(cmd, cx);
    }

    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        let cmd = self.explorer.refresh();
        self.run_listing(cmd, cx);
    }

    pub fn open_entry(&mut self, ix: usize, cx: &mut Context<Self>) {
        if let Some(cmd) = self.explorer.open(ix) {
            self.run_listing(cmd, cx);
        }
    }

    pub fn go_back(&mut self, cx: &mut Context<Self>) {
        if let Some(cmd) = self.explorer.back() {
            self.run_listing(cmd, cx);
        }
    }

    pub fn go_up(&mut self, cx: &mut Context<Self>) {
        if let Some(cmd) = self.explorer.up() {
            self.run_listing(cmd, cx);
        }
    }

    /// Index of `name` if `dir` is still the directory on screen.
    fn locate(&self, dir: &str, name: &str) -> Option<usize> {
        if self.explorer.current_path() != dir {
            return None;
        }
        self.explorer.entries().iter().position(|e| e.name == name)
    }

    fn on_copy(&mut self, _: &CopyEntry, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(path) = self.context_index.and_then(|ix| self.explorer.copy_path(ix)) else {
            return;
        };
        info!(%path, "copied path");
        cx.write_to_clipboard(ClipboardItem::new_string(path));
    }

    fn on_paste(&mut self, _: &PasteEntry, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(source) = cx.read_from_clipboard().and_then(|item| item.text()) else {
            return;
        };
        if let Some(plan) = self.explorer.plan_paste(&source) {
            self.dispatch(ActionKind::Paste, plan.commands, Some(plan.outcome), cx);
        }
    }

    fn on_delete(&mut self, _: &DeleteEntry, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(plan) = self.context_index.and_then(|ix| self.explorer.plan_delete(ix)) {
            self.dispatch(ActionKind::Delete, plan.commands, Some(plan.outcome), cx);
        }
    }

    fn on_rename(&mut self, _: &RenameEntry, window: &mut Window, cx: &mut Context<Self>) {
        let Some(entry) = self.context_index.and_then(|ix| self.explorer.entry(ix)) else {
            return;
        };
        let dir = self.explorer.current_path().to_string();
        let old_name = entry.name.clone();
        dialogs::prompt_text(
            window,
            cx,
            "Rename",
            "Enter new name:",
            Some(old_name.clone()),
            move |page, new_name, cx| {
                let plan = page
                    .locate(&dir, &old_name)
                    .and_then(|ix| page.explorer.plan_rename(ix, &new_name));
                if let Some(plan) = plan {
                    page.dispatch(ActionKind::Rename, plan.commands, Some(plan.outcome), cx);
                }
            },
        );
    }

    fn on_change_permissions(
        &mut self,
        _: &ChangePermissions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(entry) = self.context_index.and_then(|ix| self.explorer.entry(ix)) else {
            return;
        };
        let dir = self.explorer.current_path().to_string();
        let name = entry.name.clone();
        dialogs::prompt_text(
            window,
            cx,
            "Change Permissions",
            "Enter the new permissions as octal digits:",
            None,
            move |page, mode, cx| {
                let cmd = page
                    .locate(&dir, &name)
                    .and_then(|ix| page.explorer.plan_chmod(ix, &mode));
                if let Some(cmd) = cmd {
                    page.dispatch(ActionKind::Chmod, vec![cmd], None, cx);
                }
            },
        );
    }

    fn on_new_folder(&mut self, _: &NewFolder, window: &mut Window, cx: &mut Context<Self>) {
        let dir = self.explorer.current_path().to_string();
        dialogs::prompt_text(
            window,
            cx,
            "New Folder",
            "Enter folder name:",
            None,
            move |page, name, cx| {
                if page.explorer.current_path() != dir {
                    return;
                }
                if let Some(plan) = page.explorer.plan_new_folder(&name) {
                    page.dispatch(ActionKind::NewFolder, plan.commands, Some(plan.outcome), cx);
                }
            },
        );
    }
}

impl Render for ExplorerPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        view::render(self, window, cx)
    }
}

impl crate::pages::Page for ExplorerPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        <Self as Render>::render(self, window, cx).into_any_element()
    }
}
