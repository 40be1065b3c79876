/// This example is like a visual debugger, it can draw each clipping step
use clap::Parser;
use earclip_rs::{
    loader::{Loader, PlainFileLoader},
    Builder, Context, Float, Observer, Orientation, Point, PointId, Predicate,
};
use utils::draw_svg;
mod utils;

/// Triangulate a polygon file and draw the result or every step of it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Polygon file, one `x y` pair per line
    #[arg(short, long)]
    path: std::path::PathBuf,

    /// Only draw the final triangles into this svg
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Use adaptive precision predicates
    #[arg(long, default_value = "false")]
    robust: bool,

    /// Label points with their id and location
    #[arg(long, default_value = "false")]
    debug: bool,

    #[arg(long, default_value = "1")]
    bench_count: u32,

    #[arg(long, default_value = "1000")]
    frame_count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let points = {
        let path = args.path.to_str().ok_or("path is not valid utf-8")?;
        PlainFileLoader::default().load(path)?
    };
    let predicate = if args.robust {
        Predicate::Robust
    } else {
        Predicate::Exact
    };
    let builder = Builder::new(points).predicate(predicate);

    if let Some(output_path) = args.output {
        // draw result instead of debug
        draw_svg(builder.build().triangulate()?, output_path)?;
        return Ok(());
    }

    let mut observer = DrawObserver::new(&args);
    let result = builder
        .clone()
        .build()
        .triangulate_with_observer(&mut observer);
    observer.save()?;

    match result {
        Ok(triangles) => println!("{} triangles", triangles.triangle_count()),
        Err(e) => println!("triangulate failed: {e}"),
    }

    // measure time with dummy observer
    let start = std::time::Instant::now();
    for _ in 0..args.bench_count {
        let _ = builder.clone().build().triangulate();
    }
    let duration = start.elapsed() / args.bench_count.max(1);
    println!("{:?} per triangulate", duration);

    Ok(())
}

pub struct Frame {
    pub svg: String,
    pub messages: Vec<String>,
}

struct DrawObserver {
    messages: Vec<String>,
    // whether show debug info, like point_id, locations
    debug: bool,

    frame_count: usize,

    /// the latest clipped ear, highlighted in next frame
    ear: Option<[PointId; 3]>,
    /// the latest pruned vertex, highlighted in next frame
    pruned: Option<PointId>,

    clipped_count: u64,
    pruned_count: u64,

    frames: Vec<Frame>,
}

impl DrawObserver {
    fn new(args: &Args) -> Self {
        Self {
            messages: Default::default(),
            debug: args.debug,
            frame_count: args.frame_count,
            ear: None,
            pruned: None,
            clipped_count: 0,
            pruned_count: 0,
            frames: vec![],
        }
    }

    fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        use askama::Template;

        #[derive(Template)] // this will generate the code...
        #[template(path = "draw_template.html")] // using the template in this path, relative
                                                 // to the `templates` dir in the crate root
        struct DrawTemplate<'a> {
            frames: &'a [Frame],
            clipped_count: u64,
            pruned_count: u64,
        }

        let html_content = DrawTemplate {
            frames: self.frames.as_slice(),
            clipped_count: self.clipped_count,
            pruned_count: self.pruned_count,
        }
        .render()?;

        std::fs::write("draw.html", html_content)?;
        Ok(())
    }
}

impl Observer for DrawObserver {
    fn orientation_detected(&mut self, orientation: Orientation, context: &Context) {
        self.messages.push(format!("orientation: {orientation:?}"));
        self.draw(context);
    }

    fn vertex_pruned(&mut self, point_id: PointId, context: &Context) {
        self.pruned_count += 1;
        self.pruned = Some(point_id);
        self.messages
            .push(format!("pruned colinear vertex {}", point_id.as_usize()));
        self.draw(context);
    }

    fn ear_clipped(&mut self, triangle: [PointId; 3], context: &Context) {
        self.clipped_count += 1;
        self.ear = Some(triangle);
        self.messages.push(format!(
            "ear clipped: {} {} {}",
            triangle[0].as_usize(),
            triangle[1].as_usize(),
            triangle[2].as_usize(),
        ));
        self.draw(context);
    }

    fn no_ear_found(&mut self, context: &Context) {
        self.messages.push(format!(
            "no ear found, {} vertices left",
            context.ring.len()
        ));
        self.draw(context);
    }

    fn finalized(&mut self, context: &Context) {
        self.messages.push("finalized".into());
        self.draw(context);
    }
}

impl DrawObserver {
    fn draw(&mut self, context: &Context) {
        if self.frames.len() >= self.frame_count {
            return;
        }

        use svg::Document;
        use svg::Node;

        #[derive(Debug, Clone, Copy)]
        struct MapRect {
            x: Float,
            y: Float,
            w: Float,
            h: Float,
        }

        // map rect with y flipped, svg's coordinate with origin at left-top
        #[derive(Debug)]
        struct Map {
            from: MapRect,
            to: MapRect,
        }

        impl Map {
            fn map_point(&self, p: Point) -> (Float, Float) {
                let x = (p.x - self.from.x) / self.from.w * self.to.w + self.to.x;
                let y = self.to.h - (p.y - self.from.y) / self.from.h * self.to.h + self.to.y;
                (x, y)
            }
        }

        let mut min_x = Float::MAX;
        let mut max_x = Float::MIN;
        let mut min_y = Float::MAX;
        let mut max_y = Float::MIN;
        for p in context.points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let space = (max_x - min_x).max(max_y - min_y) * 0.05; // give some space
        let from = MapRect {
            x: min_x - space,
            y: min_y - space,
            w: (max_x - min_x + 2. * space).max(1.),
            h: (max_y - min_y + 2. * space).max(1.),
        };
        let to = MapRect {
            x: 0.,
            y: 0.,
            w: 800.,
            h: 800.,
        };
        let map = Map { from, to };

        let mut doc = Document::new()
            .set("viewBox", (to.x, to.y, to.w, to.h))
            .set("style", "background-color: #F5F5F5");

        let get = |id: u16| map.map_point(context.points[id as usize]);

        for t in context.result.chunks(3) {
            doc.append(triangle(get(t[0]), get(t[1]), get(t[2]), "white", "blue"));
        }

        if let Some([p0, p1, p2]) = self.ear.take() {
            doc.append(triangle(
                get(p0.as_u16()),
                get(p1.as_u16()),
                get(p2.as_u16()),
                "white",
                "yellow",
            ));
        }

        // remaining outline
        let outline = context
            .remaining_points()
            .map(|p| map.map_point(p))
            .collect::<Vec<_>>();
        for (idx, p) in outline.iter().enumerate() {
            let q = outline[(idx + 1) % outline.len()];
            doc.append(line(*p, q, "black"));
        }

        if let Some(point_id) = self.pruned.take() {
            doc.append(circle(get(point_id.as_u16()), 6., "red", "red"));
        }

        if self.debug {
            for point_id in context.ring.point_ids() {
                let point = context.points[point_id.as_usize()];
                doc.append(text(
                    format!("({}) ({:.2}, {:.2})", point_id.as_usize(), point.x, point.y),
                    map.map_point(point),
                ));
            }
        }

        self.frames.push(Frame {
            svg: doc.to_string(),
            messages: std::mem::take(&mut self.messages),
        });
    }
}

fn line(p: (Float, Float), q: (Float, Float), color: &str) -> svg::node::element::Line {
    svg::node::element::Line::new()
        .set("class", "edge")
        .set("stroke", to_color(color))
        .set("x1", p.0)
        .set("y1", p.1)
        .set("x2", q.0)
        .set("y2", q.1)
}

fn text(content: impl Into<String>, p: (Float, Float)) -> svg::node::element::Text {
    svg::node::element::Text::new()
        .add(svg::node::Text::new(content))
        .set("x", p.0)
        .set("y", p.1)
}

fn triangle(
    p0: (Float, Float),
    p1: (Float, Float),
    p2: (Float, Float),
    border_color: &str,
    fill_color: &str,
) -> svg::node::element::Path {
    let data = svg::node::element::path::Data::new()
        .move_to(p0)
        .line_to(p1)
        .line_to(p2)
        .close();

    svg::node::element::Path::new()
        .set("d", data)
        .set("stroke", to_color(border_color))
        .set("fill", to_color(fill_color))
}

fn circle(
    c: (Float, Float),
    r: Float,
    stroke_color: &str,
    fill_color: &str,
) -> svg::node::element::Circle {
    svg::node::element::Circle::new()
        .set("cx", c.0)
        .set("cy", c.1)
        .set("r", r)
        .set("stroke", to_color(stroke_color))
        .set("stroke-width", 1)
        .set("fill", to_color(fill_color))
}

fn to_color(name: &str) -> String {
    match name {
        "blue" => "#29B6F6",
        "yellow" => "#FFA726",
        "red" => "#EF5350",
        "black" => "#3E2723",
        "gray" => "#616161",
        "clear" => "#00000000",
        _ => name,
    }
    .into()
}
