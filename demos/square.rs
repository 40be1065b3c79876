use earclip_rs::{Builder, Point};
mod utils;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // square with a notch cut into its top edge
    let builder = Builder::new(vec![
        Point::new(-10., -10.),
        Point::new(810., -10.),
        Point::new(810., 810.),
        Point::new(500., 810.),
        Point::new(400., 400.),
        Point::new(300., 810.),
        Point::new(-10., 810.),
    ]);
    let clipper = builder.build();

    match clipper.triangulate() {
        Ok(triangles) => {
            println!("indices: {:?}", triangles.triangle_list_indices());
            if let Err(e) = utils::draw_svg(triangles, "square_with_notch.svg".into()) {
                eprintln!("failed to write svg: {e}");
            }
        }
        Err(e) => eprintln!("triangulate failed: {e}"),
    }
}
