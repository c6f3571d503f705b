// File: crates/perfplot/src/viewer.rs
// Summary: Best-effort on-screen preview of a rendered frame (winit + softbuffer, CPU blit).
// Notes:
// - The PNG is always written before this runs; nothing here is fatal.
// - Blocks until the window is closed (close button or Escape).

use chart_core::RgbaFrame;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("no display available")]
    NoDisplay,

    #[error("built without the `viewer` feature")]
    Disabled,

    #[error("cannot create event loop")]
    EventLoop,

    #[cfg(feature = "viewer")]
    #[error("cannot open window: {0}")]
    Window(#[from] winit::error::OsError),

    #[cfg(feature = "viewer")]
    #[error("cannot present frame: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Show `frame` in a window titled `title`. Returns whether it was displayed.
pub fn show(frame: &RgbaFrame, title: &str) -> bool {
    match try_show(frame, title) {
        Ok(()) => true,
        Err(ViewerError::NoDisplay) => {
            log::info!("no display available, skipping preview");
            false
        }
        Err(e) => {
            log::warn!("preview unavailable: {e}");
            false
        }
    }
}

pub fn try_show(frame: &RgbaFrame, title: &str) -> Result<(), ViewerError> {
    if !display_available() {
        return Err(ViewerError::NoDisplay);
    }
    open(frame, title)
}

/// X11/Wayland sessions advertise themselves through the environment.
pub fn display_available() -> bool {
    if cfg!(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android")))) {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
    } else {
        true
    }
}

#[cfg(not(feature = "viewer"))]
fn open(_frame: &RgbaFrame, _title: &str) -> Result<(), ViewerError> {
    Err(ViewerError::Disabled)
}

#[cfg(feature = "viewer")]
fn open(frame: &RgbaFrame, title: &str) -> Result<(), ViewerError> {
    window::run(frame, title)
}

#[cfg(feature = "viewer")]
mod window {
    use std::num::NonZeroU32;

    use chart_core::RgbaFrame;
    use winit::dpi::PhysicalSize;
    use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::platform::run_return::EventLoopExtRunReturn;
    use winit::window::WindowBuilder;

    use super::ViewerError;

    /// softbuffer pixels are `0x00RRGGBB`.
    const BACKDROP: u32 = 0x00ff_ffff;

    pub(super) fn run(frame: &RgbaFrame, title: &str) -> Result<(), ViewerError> {
        // winit panics instead of erroring when no backend can connect.
        let mut event_loop = quietly(EventLoop::new).ok_or(ViewerError::EventLoop)?;
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(frame.width, frame.height))
            .build(&event_loop)?;

        let context = unsafe { softbuffer::Context::new(&window) }?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;
        let packed = pack_0rgb(frame);
        log::debug!("preview window {}x{}", frame.width, frame.height);

        let mut failure = None;
        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event: WindowEvent::CloseRequested, .. }
                | Event::WindowEvent {
                    event:
                        WindowEvent::KeyboardInput {
                            input:
                                KeyboardInput {
                                    state: ElementState::Pressed,
                                    virtual_keycode: Some(VirtualKeyCode::Escape),
                                    ..
                                },
                            ..
                        },
                    ..
                } => *control_flow = ControlFlow::Exit,
                Event::WindowEvent { event: WindowEvent::Resized(_), .. } => window.request_redraw(),
                Event::RedrawRequested(_) => {
                    let size = window.inner_size();
                    if let Err(e) = blit(&mut surface, &packed, frame, size) {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn blit(
        surface: &mut softbuffer::Surface,
        packed: &[u32],
        frame: &RgbaFrame,
        size: PhysicalSize<u32>,
    ) -> Result<(), ViewerError> {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            // Minimised.
            return Ok(());
        };
        surface.resize(w, h)?;
        let mut buffer = surface.buffer_mut()?;
        buffer.fill(BACKDROP);

        // Top-left aligned, cropped if the window is smaller than the frame.
        let cols = size.width.min(frame.width) as usize;
        let rows = size.height.min(frame.height) as usize;
        for y in 0..rows {
            let src = y * frame.width as usize;
            let dst = y * size.width as usize;
            buffer[dst..dst + cols].copy_from_slice(&packed[src..src + cols]);
        }
        buffer.present()?;
        Ok(())
    }

    /// Run `f`, turning a panic into `None` without the panic hook's stderr report.
    pub(super) fn quietly<T>(f: impl FnOnce() -> T + std::panic::UnwindSafe) -> Option<T> {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let result = std::panic::catch_unwind(f);
        std::panic::set_hook(hook);
        result.ok()
    }

    /// RGBA8 rows to `0x00RRGGBB` words, dropping row padding.
    pub(super) fn pack_0rgb(frame: &RgbaFrame) -> Vec<u32> {
        let row_bytes = frame.width as usize * 4;
        frame
            .pixels
            .chunks(frame.stride)
            .take(frame.height as usize)
            .flat_map(|row| row[..row_bytes].chunks_exact(4))
            .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
            .collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_display_is_not_an_error_for_callers() {
        if display_available() {
            return;
        }
        let frame = RgbaFrame { pixels: vec![255; 4], width: 1, height: 1, stride: 4 };
        assert!(matches!(try_show(&frame, "t"), Err(ViewerError::NoDisplay)));
        assert!(!show(&frame, "t"));
    }
}
