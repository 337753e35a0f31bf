// DOM element ids for the canvas and the control widgets.

pub const CANVAS_ID: &str = "glcanvas";

pub const ROTATION_SLIDER_ID: &str = "rotation"; // degrees
pub const HEIGHT_SLIDER_ID: &str = "height"; // raw value, divided by 50
pub const ZOOM_SLIDER_ID: &str = "scale"; // 0..200
pub const PROJECTION_SELECT_ID: &str = "projectionSelect";
pub const WIREFRAME_CHECKBOX_ID: &str = "wireframe";
pub const IMAGE_INPUT_ID: &str = "imageInput";

pub const LOAD_FAILED_MESSAGE: &str = "The selected file could not be loaded as an image.";
