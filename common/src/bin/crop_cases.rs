use id_photo_common::{center_crop, DocumentType};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: crop_cases <source_width> <source_height>");
        std::process::exit(1);
    }

    let (Ok(src_w), Ok(src_h)) = (args[1].parse::<u32>(), args[2].parse::<u32>()) else {
        eprintln!("Invalid size: {} x {}", args[1], args[2]);
        std::process::exit(1);
    };

    println!("Source: {}x{} px (ratio {:.4})", src_w, src_h, src_w as f64 / src_h.max(1) as f64);

    for doc in DocumentType::ALL {
        let size = doc.print_size();
        match center_crop((src_w, src_h), (size.width, size.height)) {
            Ok(region) => {
                let rect = region.pixel_rect((src_w, src_h));
                println!(
                    "{:<9} {:>7}  crop ({:.2}, {:.2}) {:.2}x{:.2} -> px ({}, {}) {}x{} -> out {}x{}",
                    doc.id(),
                    size.label,
                    region.offset_x,
                    region.offset_y,
                    region.render_width,
                    region.render_height,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    region.output_width,
                    region.output_height,
                );
            }
            Err(e) => {
                eprintln!("{}: {}", doc.id(), e);
                std::process::exit(1);
            }
        }
    }
}
