use crate::types::Point;
use web_sys::{HtmlCanvasElement, MouseEvent};

pub fn client_to_canvas_coords(event: &MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    // Get the bounding rectangle of the canvas element
    let rect = canvas.get_bounding_client_rect();

    // Calculate canvas coordinates by subtracting the canvas's position from the event coordinates
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();

    Point::new(x, y)
}
