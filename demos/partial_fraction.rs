use partfrac::{
    apart::{DecompositionOptions, FactoredRationalFunction},
    domains::float::{FloatField, RR},
    poly::UnivariatePolynomial,
    printer::{DecompositionPrinter, PrintOptions, RationalFunctionPrinter},
};

fn poly(c: &[f64]) -> UnivariatePolynomial<FloatField> {
    UnivariatePolynomial::from_coefficients(c.to_vec(), RR)
}

fn decompose(f: &FactoredRationalFunction<FloatField>, options: &DecompositionOptions) {
    let opts = PrintOptions::unicode();

    println!("Partial fraction {}:", RationalFunctionPrinter::new(f, &opts));
    match f.apart(options) {
        Ok(r) => println!("\t{}", DecompositionPrinter::new(&r, &opts)),
        Err(e) => println!("\t{}", e),
    }
}

fn repeated_linear() {
    let f = FactoredRationalFunction::new(
        poly(&[375., -199., 36., -2.]),
        vec![
            poly(&[0., 1.]),
            poly(&[-5., 1.]),
            poly(&[-5., 1.]),
            poly(&[-5., 1.]),
            poly(&[2.]),
        ],
    );

    decompose(&f, &DecompositionOptions::new());
}

fn repeated_quadratic() {
    let f = FactoredRationalFunction::new(
        poly(&[-44., -8., -26., -2., -4.]),
        vec![poly(&[1., 1.]), poly(&[3., 0., 1.]), poly(&[3., 0., 1.])],
    );

    decompose(&f, &DecompositionOptions::flat());
}

fn main() {
    repeated_linear();
    repeated_quadratic();
}
