use hk_pairing::encode_uri;
use hk_pairing::identifiers::{generate_csn, generate_device_code, generate_serial};
use label_render::barcode::{code39_modules, render_code39};
use label_render::qr::render_qr;
use label_render::{LabelContent, LabelStyle, encode_png, load_font, render_label};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample_content(mac: Option<&str>) -> LabelContent {
    let mut rng = StdRng::seed_from_u64(11);
    LabelContent {
        category_name: "Light".into(),
        device_code: generate_device_code(5, &mut rng),
        serial: generate_serial(&mut rng),
        csn: generate_csn(&mut rng),
        setup_code: "613-80-755".into(),
        uri: encode_uri(5, "613-80-755", "HSPN").unwrap(),
        mac: mac.map(str::to_string),
    }
}

#[test]
fn identifiers_are_barcode_encodable() {
    let content = sample_content(Some("30AEA40506A0"));
    for text in [
        content.device_code.as_str(),
        content.serial.as_str(),
        content.csn.as_str(),
        "30AEA40506A0",
    ] {
        let img = render_code39(text, 1, 8).unwrap();
        assert_eq!(img.width(), code39_modules(text));
    }
}

#[test]
fn setup_uri_fits_qr() {
    let uri = encode_uri(32, "999-99-998", "ZZZZ").unwrap();
    let img = render_qr(&uri, 272).unwrap();
    assert_eq!(img.dimensions(), (272, 272));
}

#[test]
fn renders_full_label_when_a_font_is_available() {
    let font = match load_font(None) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("skipping label render test: {e}");
            return;
        }
    };
    let font = font.font().unwrap();

    let style = LabelStyle::default();
    let img = render_label(&sample_content(Some("30AEA40506A0")), &font, &style).unwrap();
    assert_eq!(img.dimensions(), (1684, 500));
    // Some ink landed on the canvas.
    assert!(img.pixels().any(|p| p[0] < 128));

    let without_mac = render_label(&sample_content(None), &font, &style).unwrap();
    assert_ne!(img, without_mac);

    // Barcodes stay whole at fractional scales: nothing reaches the right edge.
    for scale in [1.5, 2.5] {
        let style = LabelStyle {
            scale,
            ..LabelStyle::default()
        };
        let img = render_label(&sample_content(Some("30AEA40506A0")), &font, &style).unwrap();
        let last = img.width() - 1;
        assert!(
            (0..img.height()).all(|y| img.get_pixel(last, y)[0] == 255),
            "ink on right edge at scale {scale}"
        );
    }

    let png = encode_png(&img).unwrap();
    assert!(png.starts_with(b"\x89PNG"));

    let bad = LabelStyle {
        scale: 0.0,
        ..LabelStyle::default()
    };
    assert!(render_label(&sample_content(None), &font, &bad).is_err());
}
