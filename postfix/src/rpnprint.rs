use crate::converter::PostfixConverter;

impl PostfixConverter {
    /// The converted sequence in left-to-right postfix order, cells
    /// space-separated. Read-only unless `clear_after` is set.
    pub fn render_postfix(&mut self, clear_after: bool) -> String {
        let text = self
            .postfix
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        if clear_after {
            self.postfix.clear();
        }
        text
    }
}
