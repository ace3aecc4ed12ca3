use ll1::generator::Generator;
use ll1::parsers::predictive::Parser;
use ll1::sample;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generated_sentences_parse() {
    let g = sample::grammar();
    let generator = Generator::new(&g).unwrap();
    let parser = Parser::new(&g);

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sentence = generator.generate(&mut rng, 10);
        assert!(
            parser.parse(&sentence).accepted,
            "seed {} generated unparseable sentence {:?}",
            seed,
            sentence
        );
    }
}

#[test]
fn test_depth_bound_zero_still_parses() {
    let g = sample::grammar();
    let generator = Generator::new(&g).unwrap();
    let parser = Parser::new(&g);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sentence = generator.generate(&mut rng, 0);
        assert!(parser.parse(&sentence).accepted);
    }
}

#[test]
fn test_equal_seeds_generate_equal_sentences() {
    let g = sample::grammar();
    let generator = Generator::new(&g).unwrap();

    for seed in [0, 1, 42, u64::MAX] {
        let mut first = StdRng::seed_from_u64(seed);
        let mut second = StdRng::seed_from_u64(seed);
        assert_eq!(
            generator.generate(&mut first, 10),
            generator.generate(&mut second, 10)
        );
    }
}

#[test]
fn test_no_end_marker_in_output() {
    let g = sample::grammar();
    let generator = Generator::new(&g).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let sentence = generator.generate(&mut rng, 12);
        assert!(!sentence.contains('$'));
        assert!(!sentence.is_empty());
    }
}
