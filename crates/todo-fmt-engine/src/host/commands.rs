use log::debug;

use crate::{formatting::Formatter, mode::FormatMode};

use super::{HostError, HostSettings, SpanEditor, TextSpan, span::coalesce};

/// The editor commands: format, mark-as, promote and the pre-save hook.
///
/// Each command reads spans out of a [`SpanEditor`], runs a text transform
/// and writes the result back in place. Selections are handled last to
/// first so that earlier offsets stay valid while later text changes length.
#[derive(Debug, Clone, Copy)]
pub struct TodoCommands<'f> {
    formatter: &'f Formatter,
    mode: FormatMode,
}

impl<'f> TodoCommands<'f> {
    pub fn new(formatter: &'f Formatter, mode: FormatMode) -> Self {
        Self { formatter, mode }
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn format_all<E: SpanEditor + ?Sized>(&self, editor: &mut E) -> Result<(), HostError> {
        let all = TextSpan::new(0, editor.len());
        self.run(editor, all, |text| self.formatter.format(text, self.mode))
    }

    /// Formats each selection on its own. Overlapping selections are merged.
    pub fn format_spans<E: SpanEditor + ?Sized>(
        &self,
        editor: &mut E,
        spans: &[TextSpan],
    ) -> Result<(), HostError> {
        for span in coalesce(spans).into_iter().rev() {
            self.run(editor, span, |text| self.formatter.format(text, self.mode))?;
        }
        Ok(())
    }

    /// Relabels the lines under each selection with the bullet called
    /// `style`, then formats the whole buffer.
    pub fn mark_as<E: SpanEditor + ?Sized>(
        &self,
        editor: &mut E,
        spans: &[TextSpan],
        style: &str,
    ) -> Result<(), HostError> {
        let symbol = self
            .formatter
            .catalog()
            .by_name(style)
            .map(|b| b.symbol)
            .ok_or_else(|| HostError::UnknownBullet(style.to_string()))?;

        self.rewrite_lines(editor, spans, |text| self.formatter.relabel(text, symbol))?;
        self.format_all(editor)
    }

    /// Moves the bullets under each selection one rank up, or down when
    /// `down` is set, then formats the whole buffer.
    pub fn promote<E: SpanEditor + ?Sized>(
        &self,
        editor: &mut E,
        spans: &[TextSpan],
        down: bool,
    ) -> Result<(), HostError> {
        self.rewrite_lines(editor, spans, |text| {
            self.formatter.shift_priority(text, down)
        })?;
        self.format_all(editor)
    }

    /// Runs the save-time transform the settings ask for. Returns whether
    /// one ran.
    pub fn on_pre_save<E: SpanEditor + ?Sized>(
        &self,
        editor: &mut E,
        settings: &HostSettings,
    ) -> Result<bool, HostError> {
        if settings.remove_completed_on_save() {
            let all = TextSpan::new(0, editor.len());
            self.run(editor, all, |text| {
                self.formatter.prune_completed(text, self.mode)
            })?;
            return Ok(true);
        }
        if settings.format_on_save() {
            self.format_all(editor)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn rewrite_lines<E, F>(&self, editor: &mut E, spans: &[TextSpan], f: F) -> Result<(), HostError>
    where
        E: SpanEditor + ?Sized,
        F: Fn(&str) -> String,
    {
        let lines = spans
            .iter()
            .map(|&span| editor.line_span(span))
            .collect::<Result<Vec<_>, _>>()?;
        for span in coalesce(&lines).into_iter().rev() {
            self.run(editor, span, &f)?;
        }
        Ok(())
    }

    fn run<E, F>(&self, editor: &mut E, span: TextSpan, f: F) -> Result<(), HostError>
    where
        E: SpanEditor + ?Sized,
        F: FnOnce(&str) -> String,
    {
        let before = editor.substr(span)?;
        let after = f(&before);
        if after != before {
            debug!(
                "replacing {}..{} ({} bytes -> {} bytes)",
                span.start,
                span.end,
                before.len(),
                after.len()
            );
            editor.replace(span, &after)?;
        }
        Ok(())
    }
}
