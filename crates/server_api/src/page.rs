use hanoi::DiskCount;

use crate::{svg::RenderConfig, PuzzleView};

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

/// Full HTML page around an already rendered SVG frame.
pub fn render_page(view: &PuzzleView, frame: &str, cfg: &RenderConfig) -> String {
    let title = escape_html(&cfg.title);
    let disks = view.disks.get();
    let message = view
        .message
        .as_deref()
        .map(|text| format!("<p class=\"message\">{}</p>\n", escape_html(text)))
        .unwrap_or_default();
    let last_move = view
        .last_move
        .map(|mv| {
            format!(
                "<p class=\"last-move\">Moved disk {} from {} to {}</p>\n",
                mv.disk.0, mv.from, mv.to
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<center>
<h1>{title}</h1>
<form method="post" action="/">
  <label>Number of disks ({min}&ndash;{max}):</label>
  <input type="number" name="disks" min="{min}" max="{max}" value="{disks}">
  <input type="submit" value="Solve">
</form>
{message}<h2>Step {step} / {total}</h2>
{frame}
{last_move}<form method="get" action="/" style="display: flex; align-items: center; justify-content: center; gap: 10px;">
  <input type="hidden" name="disks" value="{disks}">
  <button type="submit" name="prev" value="1"{prev_disabled}>&lt;</button>
  <input type="range" name="index" min="0" max="{total}" value="{step}"
         oninput="this.form.elements.position.value = this.value" onchange="this.form.submit()">
  <output name="position">{step}</output>
  <button type="submit" name="next" value="1"{next_disabled}>&gt;</button>
</form>
</center>
</body>
</html>
"#,
        min = DiskCount::MIN,
        max = DiskCount::MAX,
        step = view.step,
        total = view.total_moves,
        prev_disabled = disabled(!view.can_go_back),
        next_disabled = disabled(!view.can_go_forward),
    )
}
