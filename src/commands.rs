use crate::dialog::SaveDialog;
use crate::plane::{Circle, Plane, CIRCLE_COLOR, CIRCLE_RADIUS, ORIGIN};
use crate::save::{self, SaveError, SaveOutcome};
use std::path::PathBuf;

/// Two-part label of an activated menu entry, e.g. ("Program", "Start").
/// Matching is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuPath {
    pub category: String,
    pub action: String,
}

impl MenuPath {
    pub fn new(category: &str, action: &str) -> MenuPath {
        MenuPath {
            category: category.into(),
            action: action.into(),
        }
    }
}

// Menu paths are decoded into this closed set once, at the event boundary;
// everything downstream dispatches on the enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    About,
    Start,
    Finish,
    Save,
}

impl Command {
    pub fn from_path(path: &MenuPath) -> Option<Command> {
        match (path.category.as_str(), path.action.as_str()) {
            ("Info", "About") => Some(Command::About),
            ("Program", "Start") => Some(Command::Start),
            ("Program", "Finish") => Some(Command::Finish),
            ("File", "Save") => Some(Command::Save),
            _ => None,
        }
    }
}

/// What `route` did, for the status line.
#[derive(Debug, PartialEq, Eq)]
pub enum Routed {
    Ignored,
    AboutShown,
    Started,
    Finished,
    Saved(PathBuf),
    SaveCancelled,
}

pub fn show_about(about_open: &mut bool) {
    *about_open = true;
}

/// Respawns the demo circle: fixed primitive, visible, parked at the origin
/// with the target reset so it does not immediately wander off.
pub fn start_program(plane: &mut Plane) {
    plane.set_primitive(Circle::new(CIRCLE_RADIUS, CIRCLE_COLOR));
    plane.place_at(ORIGIN);
    plane.set_to_draw(true);
    plane.set_target_position(ORIGIN);
}

// hides the circle; primitive and target are left as they are
pub fn finish_program(plane: &mut Plane) {
    plane.set_to_draw(false);
}

/// Applies at most one recognized effect for the given menu path.
/// Unrecognized paths are no-ops; only the save flow can fail.
pub fn route(
    path: &MenuPath,
    plane: &mut Plane,
    about_open: &mut bool,
    dialog: &dyn SaveDialog,
    default_name: &str,
) -> Result<Routed, SaveError> {
    let Some(cmd) = Command::from_path(path) else {
        return Ok(Routed::Ignored);
    };
    log::info!("menu command: {:?}", cmd);
    match cmd {
        Command::About => {
            show_about(about_open);
            Ok(Routed::AboutShown)
        }
        Command::Start => {
            start_program(plane);
            Ok(Routed::Started)
        }
        Command::Finish => {
            finish_program(plane);
            Ok(Routed::Finished)
        }
        Command::Save => match save::save_via_dialog(dialog, default_name)? {
            SaveOutcome::Saved(path) => Ok(Routed::Saved(path)),
            SaveOutcome::Cancelled => Ok(Routed::SaveCancelled),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;
    use std::cell::Cell;

    struct CountingDialog {
        calls: Cell<u32>,
    }

    impl CountingDialog {
        fn new() -> CountingDialog {
            CountingDialog {
                calls: Cell::new(0),
            }
        }
    }

    impl SaveDialog for CountingDialog {
        fn prompt_save(&self, _: &str, _: &str, _: &str, _: &[&str]) -> Option<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            None
        }
    }

    #[test]
    fn test_decode_recognized_paths() {
        assert_eq!(
            Command::from_path(&MenuPath::new("Info", "About")),
            Some(Command::About)
        );
        assert_eq!(
            Command::from_path(&MenuPath::new("Program", "Start")),
            Some(Command::Start)
        );
        assert_eq!(
            Command::from_path(&MenuPath::new("Program", "Finish")),
            Some(Command::Finish)
        );
        assert_eq!(
            Command::from_path(&MenuPath::new("File", "Save")),
            Some(Command::Save)
        );
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert_eq!(Command::from_path(&MenuPath::new("program", "Start")), None);
        assert_eq!(Command::from_path(&MenuPath::new("Program", "start")), None);
        assert_eq!(Command::from_path(&MenuPath::new("File", "Open")), None);
    }

    #[test]
    fn test_unknown_path_is_a_noop() {
        let mut plane = Plane::new();
        start_program(&mut plane);
        plane.set_target_position(pos2(120.0, 30.0));
        let before_pos = plane.position();
        let mut about_open = false;
        let dialog = CountingDialog::new();

        let routed = route(
            &MenuPath::new("File", "Open"),
            &mut plane,
            &mut about_open,
            &dialog,
            "output.txt",
        )
        .unwrap();

        assert_eq!(routed, Routed::Ignored);
        assert!(plane.to_draw());
        assert_eq!(plane.position(), before_pos);
        assert_eq!(plane.target_position(), pos2(120.0, 30.0));
        assert!(!about_open);
        assert_eq!(dialog.calls.get(), 0);
    }

    #[test]
    fn test_start_resets_the_plane() {
        let mut plane = Plane::new();
        // scramble the state first
        plane.set_primitive(Circle::new(10.0, eframe::egui::Color32::BLUE));
        plane.place_at(pos2(300.0, 300.0));
        plane.set_target_position(pos2(400.0, 10.0));
        plane.set_to_draw(false);

        start_program(&mut plane);

        assert!(plane.to_draw());
        assert_eq!(plane.position(), ORIGIN);
        assert_eq!(plane.target_position(), ORIGIN);
        assert_eq!(plane.primitive(), Circle::new(CIRCLE_RADIUS, CIRCLE_COLOR));
    }

    #[test]
    fn test_finish_only_clears_the_draw_flag() {
        let mut plane = Plane::new();
        start_program(&mut plane);
        plane.set_target_position(pos2(200.0, 100.0));

        finish_program(&mut plane);

        assert!(!plane.to_draw());
        assert_eq!(plane.target_position(), pos2(200.0, 100.0));
        assert_eq!(plane.primitive(), Circle::new(CIRCLE_RADIUS, CIRCLE_COLOR));
    }

    #[test]
    fn test_route_save_reports_cancellation() {
        let mut plane = Plane::new();
        let mut about_open = false;
        let dialog = CountingDialog::new();

        let routed = route(
            &MenuPath::new("File", "Save"),
            &mut plane,
            &mut about_open,
            &dialog,
            "output.txt",
        )
        .unwrap();

        assert_eq!(routed, Routed::SaveCancelled);
        assert_eq!(dialog.calls.get(), 1);
    }

    #[test]
    fn test_route_about_opens_the_dialog() {
        let mut plane = Plane::new();
        let mut about_open = false;
        let dialog = CountingDialog::new();

        let routed = route(
            &MenuPath::new("Info", "About"),
            &mut plane,
            &mut about_open,
            &dialog,
            "output.txt",
        )
        .unwrap();

        assert_eq!(routed, Routed::AboutShown);
        assert!(about_open);
    }
}
