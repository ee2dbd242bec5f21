use std::process::ExitCode;

use anyhow::Result;
use sdl2::{
    event::Event,
    keyboard::Scancode,
    pixels::Color as SdlColor,
    rect::Point as SdlPoint,
    render::Canvas,
    video::Window,
    EventPump, Sdl, VideoSubsystem,
};

use crate::{
    basis::{Color, Point, WindowSpec},
    error::InitError,
    raster::Frame,
    scene::{Arrows, Scene},
};

impl From<Color> for SdlColor {
    fn from(c: Color) -> Self {
        SdlColor::RGBA(c.r, c.g, c.b, c.a)
    }
}

impl From<Point> for SdlPoint {
    fn from(p: Point) -> Self {
        SdlPoint::new(p.x, p.y)
    }
}

// 描画の失敗は無視する
impl Frame for Canvas<Window> {
    fn set_color(&mut self, color: Color) {
        self.set_draw_color(color);
    }

    fn clear(&mut self) {
        Canvas::clear(self);
    }

    fn plot_points(&mut self, points: &[Point]) {
        let points = points.iter().map(|&p| p.into()).collect::<Vec<SdlPoint>>();
        let _ = self.draw_points(&points[..]);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let _ = Canvas::draw_line(self, SdlPoint::from(from), SdlPoint::from(to));
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}

/// `Display` は SDL の初期化からウィンドウ, vsync 付きのハードウェアアクセラレーションされた `Canvas`, イベントキューまでをまとめて所有する.
///
/// 途中で失敗した場合もそれまでに作ったものは drop で逆順に解放される.
pub struct Display {
    event_pump: EventPump,
    canvas: Canvas<Window>,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl Display {
    pub fn open(spec: &WindowSpec) -> Result<Self, InitError> {
        let sdl = sdl2::init().map_err(InitError::Subsystem)?;
        let video = sdl.video().map_err(InitError::Subsystem)?;

        let window = video
            .window(spec.title, spec.width, spec.height)
            .position_centered()
            .build()
            .map_err(|e| InitError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| InitError::Renderer(e.to_string()))?;

        let event_pump = sdl.event_pump().map_err(InitError::Subsystem)?;

        tracing::info!(
            title = spec.title,
            width = spec.width,
            height = spec.height,
            "window opened"
        );

        Ok(Self {
            event_pump,
            canvas,
            _video: video,
            _sdl: sdl,
        })
    }

    /// 終了要求が来るまでフレームループを回す.
    pub fn run<S: Scene>(&mut self, scene: &mut S) -> LoopState {
        let mut state = LoopState::new();

        while state.running {
            for event in self.event_pump.poll_iter() {
                state.process_sdl_event(&event);
            }

            let held = held_arrows(&self.event_pump);

            scene.update(held);
            scene.render(&mut self.canvas);
            Frame::present(&mut self.canvas);

            state.frames += 1;
        }

        tracing::info!(frames = state.frames, "frame loop finished");
        state
    }
}

/// `scene` のウィンドウを開いて閉じられるまで動かす. 初期化に失敗したら理由を標準出力に書いて終了コード 1 を返す.
pub fn launch<S: Scene>(scene: S) -> ExitCode {
    match play(scene) {
        Ok(()) => ExitCode::SUCCESS,

        Err(e) => {
            println!("{}", e);
            tracing::error!(error = %e, "initialization failed");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn play<S: Scene>(mut scene: S) -> Result<()> {
    let mut display = Display::open(&S::WINDOW)?;
    display.run(&mut scene);
    Ok(())
}

fn exit_status(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<InitError>() {
        Some(_) => InitError::EXIT_CODE,
        None => 1,
    }
}

/// イベントキューとは別に, 今押されている矢印キーをキーボードの状態から読む.
fn held_arrows(event_pump: &EventPump) -> Arrows {
    let keys = event_pump.keyboard_state();
    let mut held = Arrows::empty();

    for &(scancode, arrow) in [
        (Scancode::Up, Arrows::UP),
        (Scancode::Down, Arrows::DOWN),
        (Scancode::Left, Arrows::LEFT),
        (Scancode::Right, Arrows::RIGHT),
    ]
    .iter()
    {
        if keys.is_scancode_pressed(scancode) {
            held |= arrow;
        }
    }

    held
}

/// `LoopState` はフレームループの状態を表す. `running` が落ちたフレームを描き終えたところでループを抜ける.
#[derive(Debug)]
pub struct LoopState {
    pub running: bool,
    pub frames: u64,
}

impl LoopState {
    fn new() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    /// 終了要求だけを拾う. キー入力はイベントではなくキーボードの状態から読むのでここでは見ない.
    fn process_sdl_event(&mut self, event: &Event) {
        if let Event::Quit { .. } = event {
            self.running = false;
        }
    }
}
