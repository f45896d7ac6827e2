// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use barcode_embed::{
    BarcodeFacade, BarcodeOptions, BarcodeRequest, OutputFormat, Symbology, engine, parse_presets,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn benchmark_encode_ean13(c: &mut Criterion,)
{
    c.bench_function("encode_ean13", |b| {
        b.iter(|| engine::encode(black_box("9313920040041",), Symbology::Ean13,).expect("encode failed",),)
    },);
}

fn benchmark_encode_code128(c: &mut Criterion,)
{
    c.bench_function("encode_code128_auto", |b| {
        b.iter(|| {
            engine::encode(black_box("BARCODE-EMBED 0123456789",), Symbology::Code128,)
                .expect("encode failed",)
        },)
    },);
}

fn benchmark_render_formats(c: &mut Criterion,)
{
    let facade = BarcodeFacade::default();
    let mut group = c.benchmark_group("render_ean13",);
    for format in OutputFormat::ALL {
        let request = BarcodeRequest::default().with_format(format.as_str(),);
        group.bench_function(format.as_str(), |b| {
            b.iter(|| facade.render(&request, black_box("9313920040041",),).expect("render failed",),)
        },);
    }
    group.finish();
}

fn benchmark_embed_helpers(c: &mut Criterion,)
{
    let facade = BarcodeFacade::default();
    let options = BarcodeOptions::default().with_height(50,);

    c.bench_function("embed_svg_then_html", |b| {
        b.iter(|| {
            let svg = facade.embed_svg(black_box("9313920040041",), &options,).expect("svg failed",);
            let html = facade.render_html(black_box("9313920040041",), &options,).expect("html failed",);
            black_box(svg.len() + html.len(),)
        },)
    },);
}

fn benchmark_parse_presets(c: &mut Criterion,)
{
    let mut yaml = String::from("defaults:\n  height: 40\npresets:\n",);
    for i in 0..100 {
        yaml.push_str(&format!("  - name: Preset {i}\n    format: svg\n    type: C128\n"),);
    }

    c.bench_function("parse_100_presets", |b| {
        b.iter(|| parse_presets(black_box(&yaml,),).expect("parse failed",),)
    },);
}

criterion_group!(
    benches,
    benchmark_encode_ean13,
    benchmark_encode_code128,
    benchmark_render_formats,
    benchmark_embed_helpers,
    benchmark_parse_presets
);
criterion_main!(benches);
