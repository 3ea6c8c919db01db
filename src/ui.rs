use crate::history::HistoryRow;
use ammonia::clean_text;

pub fn render_index(rows: &[HistoryRow], notice: Option<&str>) -> String {
    let notice = notice
        .map(|text| format!(r#"<div class="notice">{}</div>"#, clean_text(text)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{NOTICE}}", &notice)
        .replace("{{HISTORY}}", &render_rows(rows))
}

fn render_rows(rows: &[HistoryRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "<div class=\"row\"><div><b>{} {}</b> <b>{}</b> / <b>{}</b>. {}. {}</div></div>\n",
                clean_text(&row.date),
                clean_text(&row.time),
                row.systolic,
                row.diastolic,
                row.heart_rate,
                clean_text(&row.notes),
            )
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>BP Form</title>
  <style>
    body {
      font-family: Arial, sans-serif;
      margin: 20px;
    }

    form {
      max-width: 400px;
      margin: 0 auto;
    }

    label {
      display: block;
      margin-bottom: 5px;
    }

    input[type="text"], textarea {
      width: 100%;
      padding: 8px;
      box-sizing: border-box;
      margin-bottom: 15px;
    }

    .notice {
      background: #fff3cd;
      border: 1px solid #ffe08a;
      padding: 10px;
      margin-bottom: 15px;
    }

    button {
      background-color: #4CAF50;
      color: white;
      padding: 10px 20px;
      border: none;
      cursor: pointer;
    }

    button:hover {
      background-color: #45a049;
    }
  </style>
</head>
<body>
  {{NOTICE}}
  <h1>Старые данные</h1>
  <section id="history">
{{HISTORY}}  </section>

  <h1>Новые данные</h1>
  <form action="/add" method="POST">
    <label for="date">Date:</label>
    <input type="text" id="date" name="date" required placeholder="2025-04-01" value="2025-04-01" />
    <label for="time">Time:</label>
    <input type="text" id="time" name="time" required placeholder="19:00" value="19:00" />
    <br />
    <br />

    <label for="p_upper">Upper Blood Pressure:</label>
    <input type="text" id="p_upper" name="p_upper" required placeholder="Enter upper BP value" value="120" />

    <label for="p_lower">Lower Blood Pressure:</label>
    <input type="text" id="p_lower" name="p_lower" required placeholder="Enter lower BP value" value="80" />

    <label for="heart_beat_rate">Heart Beat Rate:</label>
    <input type="text" id="heart_beat_rate" name="heart_beat_rate" required placeholder="Enter heart beat rate" value="80" />

    <label for="comment">Comment:</label>
    <textarea id="comment" name="comment" rows="4" placeholder="Optional comment"></textarea>

    <button type="submit">Submit</button>
  </form>

  <script>
    const now = new Date();
    const pad = (value) => String(value).padStart(2, '0');
    document.getElementById('time').value = `${pad(now.getHours())}:${pad(now.getMinutes())}`;
    document.getElementById('date').value =
      `${now.getFullYear()}-${pad(now.getMonth() + 1)}-${pad(now.getDate())}`;
  </script>
</body>
</html>
"#;
