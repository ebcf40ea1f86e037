//! SDL2 window and presentation layer.
//!
//! Everything platform-facing lives here: window creation, the event
//! pump, and uploading the rendered byte buffer to the screen. The
//! renderer itself never touches SDL; it only ever sees the borrowed
//! pixel buffer.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::render::BYTES_PER_PIXEL;

pub const FPS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

/// Caps the frame loop at [`FPS`] frames per second.
pub struct FrameLimiter {
    frame_duration: Duration,
    previous_frame: Instant,
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self {
            frame_duration: Duration::from_millis(1000 / FPS),
            previous_frame: Instant::now(),
        }
    }

    /// Sleeps out the remainder of the frame budget and returns the time
    /// elapsed since the previous call.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.previous_frame.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
        let now = Instant::now();
        let delta = now - self.previous_frame;
        self.previous_frame = now;
        delta
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as
        // Window. We ensure texture is dropped before texture_creator by
        // struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        // ARGB8888 reads little-endian memory as B,G,R,A bytes, which is
        // the renderer's framebuffer layout, so present() needs no
        // conversion pass.
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            width,
            height,
        })
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                _ => {}
            }
        }
        WindowEvent::None
    }

    /// Upload a rendered frame and present it.
    pub fn present(&mut self, pixels: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, pixels, self.width as usize * BYTES_PER_PIXEL)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(
            &self.texture,
            None,
            Some(Rect::new(0, 0, self.width, self.height)),
        )?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
