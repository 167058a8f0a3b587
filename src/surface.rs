use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::stroke::Segment;

/// Background painted by every clear
const BLANK_FILL: &str = "#ffffff";

/// What a clear request repaints after blanking the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearPlan {
    /// Leave the buffer as a uniform blank fill
    Blank,
    /// Re-render the retained uploaded image over the blank fill
    RestoreUpload,
}

/// A preserving clear only restores when there is something retained to
/// restore; a non-preserving clear always ends blank.
pub fn clear_plan(preserve_upload: bool, has_upload: bool) -> ClearPlan {
    if preserve_upload && has_upload {
        ClearPlan::RestoreUpload
    } else {
        ClearPlan::Blank
    }
}

/// The 512x512 raster buffer behind the sketch canvas.
///
/// Owns the 2D context and is the only writer to it. Stroke segments, image
/// loads and clears all land here; serialization for submission reads back
/// the same buffer.
#[derive(Clone)]
pub struct DrawingSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl DrawingSurface {
    /// Attach to a mounted canvas element. A missing 2D context is a broken
    /// host page, not a recoverable condition.
    pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("failed to get 2d context: {e:?}"))?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;

        Ok(Self { canvas, ctx })
    }

    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    /// Paint one stroke segment with round caps
    pub fn stroke_segment(&self, segment: &Segment, color: &str, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.set_line_cap("round");
        self.ctx.stroke();
    }

    /// Render a decoded bitmap scaled to the full buffer, replacing contents
    pub fn render_bitmap(&self, image: &HtmlImageElement) -> Result<(), String> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                0.0,
                0.0,
                self.width(),
                self.height(),
            )
            .map_err(|e| format!("failed to draw uploaded image: {e:?}"))
    }

    /// Blank the buffer, then restore the uploaded image when the plan says so
    pub fn clear(
        &self,
        uploaded: Option<&HtmlImageElement>,
        preserve_upload: bool,
    ) -> Result<(), String> {
        self.fill_blank();
        match clear_plan(preserve_upload, uploaded.is_some()) {
            ClearPlan::Blank => Ok(()),
            ClearPlan::RestoreUpload => {
                // plan only restores when an upload is retained
                self.render_bitmap(uploaded.expect("upload retained"))
            }
        }
    }

    pub fn fill_blank(&self) {
        self.ctx.set_fill_style_str(BLANK_FILL);
        self.ctx.fill_rect(0.0, 0.0, self.width(), self.height());
    }

    /// Serialize the buffer to a PNG blob via `toBlob`
    pub async fn to_png(&self) -> Result<Blob, String> {
        let canvas = self.canvas.clone();
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let callback = Closure::once_into_js(move |blob: JsValue| {
                resolve.call1(&JsValue::NULL, &blob).ok();
            });
            if canvas
                .to_blob_with_type(callback.unchecked_ref(), "image/png")
                .is_err()
            {
                reject
                    .call1(&JsValue::NULL, &JsValue::from_str("toBlob rejected"))
                    .ok();
            }
        });

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| format!("canvas serialization failed: {e:?}"))?;
        value
            .dyn_into::<Blob>()
            .map_err(|_| "canvas produced no blob".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserving_clear_restores_retained_upload() {
        assert_eq!(clear_plan(true, true), ClearPlan::RestoreUpload);
    }

    #[test]
    fn test_preserving_clear_without_upload_is_blank() {
        // clear-upload followed by a preserving clear must stay blank
        assert_eq!(clear_plan(true, false), ClearPlan::Blank);
    }

    #[test]
    fn test_full_clear_ignores_upload() {
        assert_eq!(clear_plan(false, true), ClearPlan::Blank);
        assert_eq!(clear_plan(false, false), ClearPlan::Blank);
    }
}
