use crate::models::icons::{IconKind, IconSet};
use crate::pages::explorer::{
    ChangePermissions, CopyEntry, DeleteEntry, NewFolder, PasteEntry, RenameEntry,
};
use gpui::{Action, FocusHandle};
use gpui_component::popup_menu::PopupMenu;
use gpui_component::Icon;

/// Context menu for the listing. Entry actions act on
/// `ExplorerPage::context_index` and do nothing when it is empty.
pub fn build(menu: PopupMenu, icons: &IconSet, focus_handle: FocusHandle) -> PopupMenu {
    let menu = menu.action_context(focus_handle);
    let menu = item(menu, icons, IconKind::Copy, "Copy", Box::new(CopyEntry));
    let menu = item(menu, icons, IconKind::Paste, "Paste", Box::new(PasteEntry));
    let menu = item(menu, icons, IconKind::Delete, "Delete", Box::new(DeleteEntry));
    let menu = item(menu, icons, IconKind::Rename, "Rename", Box::new(RenameEntry));
    let menu = item(
        menu,
        icons,
        IconKind::Permission,
        "Change Permissions..",
        Box::new(ChangePermissions),
    );
    let menu = menu.separator();
    item(menu, icons, IconKind::Create, "New Folder..", Box::new(NewFolder))
}

fn item(
    menu: PopupMenu,
    icons: &IconSet,
    kind: IconKind,
    label: &'static str,
    action: Box<dyn Action>,
) -> PopupMenu {
    match icons.get(kind) {
        Some(path) => menu.menu_with_icon(label, Icon::new(Icon::empty()).path(path), action),
        None => menu.menu(label, action),
    }
}
