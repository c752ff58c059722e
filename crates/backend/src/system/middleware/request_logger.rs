use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Middleware для логирования HTTP запросов
///
/// Одна строка в консоль на запрос: время, длительность, размер ответа,
/// статус, метод и путь. Ответы 2xx подсвечиваются голубым, прочие жёлтым.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читается целиком, чтобы знать реальный размер
    let (bytes, size) = match to_bytes(body, usize::MAX).await {
        Ok(b) => {
            let size = format_size(b.len());
            (b, size)
        }
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {}: {}", path, e);
            (Default::default(), "error".to_string())
        }
    };

    let color_code = if parts.status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// Число с разделителями триад: 1234567 -> "1.234.567"
fn format_size(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}
