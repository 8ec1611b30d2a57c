//! Optional integration with an embedding host shell.
//!
//! A host (a chat mini-app container, a desktop wrapper) may offer preferred
//! colours and a place to put a single "close" action. Running without one is
//! the normal case: [`NoHost`] answers nothing and ignores registrations.

/// Fallback background colour when the host provides none.
pub const DEFAULT_BACKGROUND: &str = "#f1f5f9";

/// Fallback text colour when the host provides none.
pub const DEFAULT_TEXT: &str = "#1e293b";

/// Label of the dismiss action registered with a host.
pub const DISMISS_LABEL: &str = "Close calculator";

/// Colours offered by a host. Either may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostTheme {
    pub background: Option<String>,
    pub text: Option<String>,
}

/// Resolved colours, every slot filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: String,
    pub text: String,
}

impl ThemeColors {
    /// Fill whatever the host left out with the defaults.
    pub fn resolve(theme: Option<HostTheme>) -> Self {
        let theme = theme.unwrap_or_default();
        Self {
            background: theme
                .background
                .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
            text: theme.text.unwrap_or_else(|| DEFAULT_TEXT.to_string()),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// Capabilities an embedding shell may provide.
pub trait HostShell {
    /// Preferred colours, if the host has any.
    fn theme_colors(&self) -> Option<HostTheme>;

    /// Install a single action that closes the calculator.
    fn register_dismiss(&mut self, label: &str, action: Box<dyn FnMut()>);
}

/// No host present.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHost;

impl HostShell for NoHost {
    fn theme_colors(&self) -> Option<HostTheme> {
        None
    }

    fn register_dismiss(&mut self, _label: &str, _action: Box<dyn FnMut()>) {}
}

/// Start-up handshake with a host: read its colours once and register the
/// dismiss action. Returns the resolved colours.
pub fn attach<H>(host: &mut H, on_dismiss: impl FnMut() + 'static) -> ThemeColors
where
    H: HostShell + ?Sized,
{
    let colors = ThemeColors::resolve(host.theme_colors());
    host.register_dismiss(DISMISS_LABEL, Box::new(on_dismiss));
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingHost {
        theme: Option<HostTheme>,
        dismiss: Vec<(String, Box<dyn FnMut()>)>,
    }

    impl HostShell for RecordingHost {
        fn theme_colors(&self) -> Option<HostTheme> {
            self.theme.clone()
        }

        fn register_dismiss(&mut self, label: &str, action: Box<dyn FnMut()>) {
            self.dismiss.push((label.to_string(), action));
        }
    }

    #[test]
    fn attach_registers_single_dismiss() {
        let mut host = RecordingHost {
            theme: Some(HostTheme {
                background: Some("#17212b".into()),
                text: Some("#f5f5f5".into()),
            }),
            ..Default::default()
        };
        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);

        let colors = attach(&mut host, move || flag.set(true));

        assert_eq!(colors.background, "#17212b");
        assert_eq!(colors.text, "#f5f5f5");
        assert_eq!(host.dismiss.len(), 1);
        assert_eq!(host.dismiss[0].0, DISMISS_LABEL);

        let (_, action) = &mut host.dismiss[0];
        action();
        assert!(closed.get());
    }

    #[test]
    fn attach_without_host() {
        let colors = attach(&mut NoHost, || {});
        assert_eq!(colors, ThemeColors::default());
    }

    #[test]
    fn defaults_without_host() {
        let colors = ThemeColors::resolve(NoHost.theme_colors());
        assert_eq!(colors.background, DEFAULT_BACKGROUND);
        assert_eq!(colors.text, DEFAULT_TEXT);
    }

    #[test]
    fn partial_theme_keeps_host_values() {
        let colors = ThemeColors::resolve(Some(HostTheme {
            background: Some("#000000".into()),
            text: None,
        }));
        assert_eq!(colors.background, "#000000");
        assert_eq!(colors.text, DEFAULT_TEXT);
    }

    #[test]
    fn no_host_ignores_dismiss() {
        let mut host = NoHost;
        host.register_dismiss(DISMISS_LABEL, Box::new(|| panic!("must not run")));
    }
}
