//! SDL2 window management and event handling for the demonstration driver.
//! Not part of the core rendering contract: the core only needs to hand
//! back a finished [`crate::Raster`], this just blits it to a screen.

use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub mouse_dx: f64,
    pub mouse_dy: f64,
    pub mouse_captured: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            forward: false,
            back: false,
            left: false,
            right: false,
            up: false,
            down: false,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            mouse_captured: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate, returns delta time in ms.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Tracks frames per second with once-per-second updates.
pub struct FpsCounter {
    frame_count: u32,
    last_update: Instant,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            last_update: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();
        if elapsed.as_secs() >= 1 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    mouse_util: sdl2::mouse::MouseUtil,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;
        let mouse_util = sdl_context.mouse();

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and outlives texture;
        // struct field order drops texture first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::RGBA32, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            mouse_util,
            width,
            height,
        })
    }

    /// Drains the SDL event queue, folding key/mouse motion into `input`
    /// and returning any window-lifecycle event that occurred.
    pub fn poll_events(&mut self, input: &mut InputState) -> WindowEvent {
        input.mouse_dx = 0.0;
        input.mouse_dy = 0.0;
        let mut result = WindowEvent::None;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => result = WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w as u32, h as u32),
                Event::KeyDown { keycode: Some(k), .. } => set_key(input, k, true),
                Event::KeyUp { keycode: Some(k), .. } => set_key(input, k, false),
                Event::MouseMotion { xrel, yrel, .. } if input.mouse_captured => {
                    input.mouse_dx += xrel as f64;
                    input.mouse_dy += yrel as f64;
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => {
                    input.mouse_captured = !input.mouse_captured;
                    self.mouse_util.set_relative_mouse_mode(input.mouse_captured);
                }
                _ => {}
            }
        }
        result
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::RGBA32, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }

    pub fn set_title(&mut self, title: &str) {
        let _ = self.canvas.window_mut().set_title(title);
    }
}

fn set_key(input: &mut InputState, keycode: Keycode, down: bool) {
    match keycode {
        Keycode::W => input.forward = down,
        Keycode::S => input.back = down,
        Keycode::A => input.left = down,
        Keycode::D => input.right = down,
        Keycode::E => input.up = down,
        Keycode::Q => input.down = down,
        _ => {}
    }
}
