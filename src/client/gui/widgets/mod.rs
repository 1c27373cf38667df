pub mod pad_canvas;
