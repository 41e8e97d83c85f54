//! Core application state and lifecycle.

use kurbo::{Affine, Point, Size};
use nodepick_core::{InteractionController, Scene as ShapeScene, SurfaceError};
use nodepick_render::{RenderResult, RendererError, VelloSurface};
use std::sync::Arc;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::{self, PresentMode};
use vello::{AaConfig, RenderParams, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::event_handler::EventHandler;

/// Runtime state for the application, alive while the window exists.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: wgpu::util::TextureBlitter,
    /// Drawing target for the shapes, in logical pixels.
    canvas: VelloSurface,

    // State
    controller: InteractionController,
    events: EventHandler,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    /// Shapes waiting for the window to come up.
    pending_scene: Option<ShapeScene>,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// Error that stopped the event loop, reported once `run` returns.
    fatal: Option<RendererError>,
}

impl App {
    /// Create a new application showing `scene`.
    pub fn new(config: AppConfig, scene: ShapeScene) -> Self {
        Self {
            config,
            pending_scene: Some(scene),
            state: None,
            render_cx: None,
            fatal: None,
        }
    }

    /// Run the application with the sample scene until the window closes.
    pub fn run(config: AppConfig) -> RenderResult<()> {
        config
            .validate()
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let scene =
            ShapeScene::sample().map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let event_loop =
            EventLoop::new().map_err(|e| RendererError::InitFailed(e.to_string()))?;

        let mut app = App::new(config, scene);
        event_loop
            .run_app(&mut app)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        match app.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Create the window, GPU surface and renderer.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> RenderResult<()> {
        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        // Vello renders to Rgba8Unorm; the surface format may differ.
        let texture_blitter = wgpu::util::TextureBlitter::new(device, surface.config.format);

        let canvas = VelloSurface::new(
            Size::new(f64::from(self.config.width), f64::from(self.config.height)),
            self.config.background(),
        );
        let scene = self.pending_scene.take().unwrap_or_default();
        let controller = InteractionController::new(scene, self.config.palette);

        window.request_redraw();
        self.state = Some(AppState {
            window,
            surface,
            vello_renderer,
            texture_blitter,
            canvas,
            controller,
            events: EventHandler::new(),
        });

        log::info!("Renderer ready");
        Ok(())
    }
}

/// Draw the scene and present it to the window.
fn render_frame(state: &mut AppState, render_cx: &RenderContext) -> RenderResult<()> {
    state.controller.redraw(&mut state.canvas)?;

    let device_handle = &render_cx.devices[state.surface.dev_id];
    let device = &device_handle.device;
    let queue = &device_handle.queue;

    let surface_texture = match state.surface.surface.get_current_texture() {
        Ok(t) => t,
        Err(e @ (wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Outdated)) => {
            log::warn!("Skipping frame: {e}");
            return Ok(());
        }
        Err(e) => return Err(SurfaceError::Backend(e.to_string()).into()),
    };

    let width = state.surface.config.width;
    let height = state.surface.config.height;

    // Shapes are laid out in logical pixels; scale them onto the physical surface.
    let mut frame = Scene::new();
    frame.append(
        state.canvas.scene(),
        Some(Affine::scale(state.window.scale_factor())),
    );

    let params = RenderParams {
        base_color: state.canvas.background(),
        width,
        height,
        antialiasing_method: AaConfig::Area,
    };

    // Vello's compute shaders need a StorageBinding texture, which requires Rgba8Unorm.
    let render_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("vello render texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::STORAGE_BINDING
            | wgpu::TextureUsages::COPY_SRC
            | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let render_texture_view =
        render_texture.create_view(&wgpu::TextureViewDescriptor::default());

    state
        .vello_renderer
        .render_to_texture(device, queue, &frame, &render_texture_view, &params)
        .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

    let surface_view = surface_texture
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut blit_encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("blit encoder"),
    });
    state.texture_blitter.copy(
        device,
        &mut blit_encoder,
        &render_texture_view,
        &surface_view,
    );
    queue.submit(std::iter::once(blit_encoder.finish()));

    surface_texture.present();
    Ok(())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to initialize: {e}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(state.window.scale_factor());
                let event = state.events.cursor_moved(Point::new(logical.x, logical.y));
                state.controller.handle_event(event);
                state.window.request_redraw();
            }

            WindowEvent::MouseInput {
                state: button_state,
                ..
            } => {
                let event = state.events.button(button_state);
                if let Some(change) = state.controller.handle_event(event) {
                    log::debug!("Selection change: {change:?}");
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };

                match render_frame(state, render_cx) {
                    // Keep ticking so every frame reflects the latest state.
                    Ok(()) => state.window.request_redraw(),
                    Err(e) => {
                        log::error!("Failed to render frame: {e}");
                        self.fatal = Some(e);
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut state) = self.state.take() {
            state.canvas.detach();
            log::info!("Window closed, surface released");
        }
    }
}
