//! Interactive 3D artifact viewer.
//!
//! `core` holds the target-independent scene, picking and viewer logic; the
//! remaining modules wire it to the browser (DOM events, WebGPU, the frame
//! loop) and are only built for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::core::{Viewer, ViewerConfig};
    use crate::{dom, events, frame, overlay, render};
    use instant::Instant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("artifact-viewer starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let (width, height) = dom::window_size(&window);
        let canvas = dom::create_canvas(&document, width, height)?;

        let mut gpu = render::GpuState::new(&canvas).await?;

        // building heights are meant to differ on every visit
        let mut rng = StdRng::from_entropy();
        let viewer = Viewer::new(ViewerConfig::default(), width, height, &mut rng);
        gpu.upload_scene(&viewer.scene);
        let panel_ids = viewer.config.panel.clone();
        let viewer = Rc::new(RefCell::new(viewer));

        overlay::install_close_panel(&window, panel_ids)?;
        events::wire_keyboard(&document, viewer.clone());
        events::wire_click(&canvas, viewer.clone());
        events::wire_resize(&canvas, viewer.clone());

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            viewer,
            canvas,
            gpu,
            started: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
        log::info!("[init] scene ready");
        Ok(())
    }
}
