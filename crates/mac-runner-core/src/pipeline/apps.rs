use crate::{pipeline::Runner, screen::Rect};

impl Runner {
    /// Queue `open -a` for `name`. `params` is appended verbatim.
    pub fn open_app(&self, name: &str, params: &str) -> Runner {
        let command = format!("open -a \"{name}\" {params}");
        self.exec_step(command.trim_end().to_string(), self.gateway.default_settle())
    }

    /// Queue bringing a running application to the foreground.
    pub fn activate_app(&self, name: &str) -> Runner {
        self.exec_step(
            format!("osascript -e 'tell application \"{name}\" to activate'"),
            self.gateway.default_settle(),
        )
    }

    /// Queue `killall` for `name`.
    pub fn kill_app(&self, name: &str) -> Runner {
        self.exec_step(format!("killall {name}"), self.gateway.default_settle())
    }

    /// Queue placing the first window of `name` at `frame`.
    ///
    /// The window is not checked afterwards.
    pub fn move_and_resize_app(&self, name: &str, frame: Rect) -> Runner {
        let [left, top, right, bottom] = frame.bounds();
        self.exec_step(
            format!(
                "osascript -e 'tell application \"{name}\" to set the bounds of the first window to {{{left}, {top}, {right}, {bottom}}}'"
            ),
            self.gateway.default_settle(),
        )
    }
}
