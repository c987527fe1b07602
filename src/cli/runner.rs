use tracing::info;

use lumaview::ViewParams;
use lumaview::api::render_frame_from_path;

use super::args::CliArgs;
use super::errors::AppError;

fn parse_target_size(size: &str) -> Result<Option<usize>, AppError> {
    if size == "original" {
        return Ok(None);
    }

    let parsed_size = size.parse::<usize>().map_err(|_| AppError::InvalidSize {
        size: size.to_string(),
    })?;

    if parsed_size == 0 {
        return Err(AppError::ZeroSize { size: parsed_size });
    }

    Ok(Some(parsed_size))
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = ViewParams {
        grayscale: args.grayscale,
        filter: args.filter,
        input_kind: args.input_kind,
        size: parse_target_size(&args.size)?,
        title: args.title,
    };

    let frame = render_frame_from_path(&args.input, &params)?;
    info!(
        "Rendered {:?} -> {}x{} frame",
        args.input, frame.width, frame.height
    );

    #[cfg(feature = "display")]
    {
        lumaview::display::show_frame(&params.title, frame)?;
        Ok(())
    }

    #[cfg(not(feature = "display"))]
    {
        let _ = frame;
        Err(AppError::DisplayUnavailable.into())
    }
}
