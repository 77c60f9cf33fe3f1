use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::animation::{next_deadline, AnimationDriver, DriverState};
use crate::config::{AnimationConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::AppError;
use crate::gpu::{GpuContext, PlotBuffers, PlotPipeline};
use crate::plot::PlotLayout;
use crate::wave::WaveParams;

/// GPU resources created once the window exists
struct RenderTarget {
    window: Arc<Window>,
    gpu: GpuContext,
    buffers: PlotBuffers,
    pipeline: PlotPipeline,
    bind_group: wgpu::BindGroup,
}

/// Application state
pub struct App {
    target: Option<RenderTarget>,
    layout: PlotLayout,
    driver: AnimationDriver,
    frame_interval: Duration,
    next_frame: Instant,
    error: Option<AppError>,
}

impl App {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            target: None,
            layout: PlotLayout::default(),
            driver: AnimationDriver::new(&config, WaveParams::default()),
            frame_interval: config.frame_interval,
            next_frame: Instant::now(),
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<AppError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<RenderTarget, AppError> {
        log::info!("Initializing wave plot...");
        log::info!(
            "Grid points: {}, frames: {}",
            self.driver.grid().len(),
            self.driver.frame_times().len()
        );

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        log::info!("Creating plot buffers...");
        let initial = self.driver.initial_displacement();
        let buffers = PlotBuffers::new(
            &gpu.device,
            &self.layout,
            gpu.format(),
            self.driver.grid(),
            &initial,
        )?;

        log::info!("Creating render pipeline...");
        let pipeline = PlotPipeline::new(&gpu.device, gpu.format());
        let bind_group = pipeline.create_bind_group(&gpu.device, &buffers.uniforms_buffer);

        log::info!("Initialization complete!");

        Ok(RenderTarget {
            window,
            gpu,
            buffers,
            pipeline,
            bind_group,
        })
    }

    /// Step the driver and upload the new frame
    fn advance(&mut self) -> Result<(), AppError> {
        let Some(target) = &self.target else {
            return Ok(());
        };

        if let Some(frame) = self.driver.tick()? {
            target.buffers.set_ydata(
                &target.gpu.queue,
                &self.layout,
                frame.positions,
                frame.displacement,
            )?;
            target
                .window
                .set_title(&format!("{} - t = {:.2}", WINDOW_TITLE, frame.time));
            target.window.request_redraw();
        }
        if self.driver.state() == DriverState::Complete {
            log::info!("Animation complete");
        }
        Ok(())
    }

    fn render(&mut self) {
        let Some(target) = &self.target else {
            return;
        };
        let gpu = &target.gpu;

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        let (width, height) = gpu.size();
        target.pipeline.draw(
            &mut encoder,
            &view,
            &target.bind_group,
            &target.buffers,
            self.layout.axes_pixels(width, height),
        );

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.target.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(target) => {
                target.window.request_redraw();
                self.target = Some(target);
                self.driver.start();
                self.next_frame = Instant::now();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(target) = &mut self.target {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    target.gpu.resize(new_size);
                    target.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.render(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.target.is_none() || self.error.is_some() {
            return;
        }
        if self.driver.state() == DriverState::Complete {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            if let Err(err) = self.advance() {
                self.fail(event_loop, err);
                return;
            }
            self.next_frame = next_deadline(self.next_frame, now, self.frame_interval);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
