/// Decides whether a board state warrants a redraw.
///
/// Remembers the signature of the last rendered board. The first call always renders;
/// later calls render only when the signature differs.
#[derive(Debug, Clone, Default)]
pub struct RenderGate {
    last_signature: Option<String>,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true (and records `signature`) when a redraw is needed.
    pub fn should_render(&mut self, signature: &str) -> bool {
        if self.last_signature.as_deref() == Some(signature) {
            return false;
        }
        self.last_signature = Some(signature.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_first_and_on_change_only() {
        let mut gate = RenderGate::new();
        assert!(gate.should_render("0,0/0,2"));
        assert!(!gate.should_render("0,0/0,2"));
        assert!(gate.should_render("0,0/2,2"));
        assert!(!gate.should_render("0,0/2,2"));
        assert!(gate.should_render("0,0/0,2"));
    }
}
