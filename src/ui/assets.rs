//! Static client assets served alongside the widget.

/// Client behaviour for the widget.
///
/// - keeps the submit button disabled while the input is blank
/// - scrolls the newest message into view whenever the thread grows
/// - tears the widget instance down when the page goes away
pub const WIDGET_JS: &str = r#"(function () {
  let lastCount = null;

  function root() {
    return document.getElementById('chat-widget');
  }

  function sync() {
    const widget = root();
    if (!widget) return;

    const input = widget.querySelector('input[name="query"]');
    const button = widget.querySelector('button[type="submit"]');
    if (input && button) {
      const update = () => {
        button.disabled = input.disabled || input.value.trim() === '';
      };
      input.addEventListener('input', update);
      update();
      if (!input.disabled) input.focus();
    }

    const count = widget.dataset.messageCount;
    if (count !== lastCount) {
      if (lastCount !== null) {
        document.getElementById('messages-end')?.scrollIntoView({ behavior: 'smooth' });
      }
      lastCount = count;
    }
  }

  document.addEventListener('DOMContentLoaded', sync);
  document.addEventListener('htmx:afterSettle', sync);

  window.addEventListener('pagehide', () => {
    const widget = root();
    if (widget) {
      fetch(widget.dataset.widgetUrl, { method: 'DELETE', keepalive: true });
    }
  });
})();
"#;
