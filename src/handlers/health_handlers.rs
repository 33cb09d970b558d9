use actix_web::{HttpResponse, http::header::ContentType, web};
use mongodb::bson::doc;
use std::time::Duration;

use crate::state::app_state::AppState;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable status page: uptime, memory, storage connectivity.
/// Not a machine contract.
pub async fn health_page(app_state: web::Data<AppState>) -> HttpResponse {
    let db_connected = app_state.db.run_command(doc! { "ping": 1 }).await.is_ok();
    let uptime = format_uptime(app_state.started_at.elapsed());
    let memory = resident_memory_mb()
        .map(|mb| format!("{:.2} MB", mb))
        .unwrap_or_else(|| "n/a".to_string());

    let (badge, badge_color) = if db_connected {
        ("HEALTHY", "#00E5A0")
    } else {
        ("ISSUES DETECTED", "#FF6347")
    };
    let db_status = if db_connected { "connected" } else { "disconnected" };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>System Health</title>
    <style>
      body {{
        font-family: sans-serif;
        background-color: #0A0A0B;
        color: white;
        margin: 0;
        padding: 2rem;
      }}
      .container {{ max-width: 800px; margin: 0 auto; }}
      .card {{
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(255, 255, 255, 0.06);
        border-radius: 1rem;
        padding: 1.5rem;
        margin-bottom: 1rem;
      }}
      .badge {{
        float: right;
        color: {badge_color};
        font-weight: bold;
      }}
      .stat-label {{ color: rgba(255, 255, 255, 0.7); font-size: 0.875rem; }}
      .stat-value {{ font-weight: bold; }}
      dl {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="card">
        <h2>System Status <span class="badge">{badge}</span></h2>
        <dl>
          <div><dt class="stat-label">Uptime</dt><dd class="stat-value">{uptime}</dd></div>
          <div><dt class="stat-label">Version</dt><dd class="stat-value">{APP_VERSION}</dd></div>
          <div><dt class="stat-label">Memory (RSS)</dt><dd class="stat-value">{memory}</dd></div>
        </dl>
      </div>
      <div class="card">
        <h2>Database</h2>
        <dl>
          <div><dt class="stat-label">MongoDB</dt><dd class="stat-value">{db_status}</dd></div>
        </dl>
      </div>
    </div>
    <script>setTimeout(() => window.location.reload(), 30000);</script>
  </body>
</html>
"#
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}

fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let days = total / (3600 * 24);
    let hours = (total % (3600 * 24)) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}

// Best-effort; only available on Linux.
fn resident_memory_mb() -> Option<f64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formats_all_units() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0d 0h 0m 0s");
        assert_eq!(format_uptime(Duration::from_secs(61)), "0d 0h 1m 1s");
        assert_eq!(
            format_uptime(Duration::from_secs(2 * 86400 + 3 * 3600 + 4 * 60 + 5)),
            "2d 3h 4m 5s"
        );
    }
}
