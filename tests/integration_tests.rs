// 統合テスト

use rand::rngs::StdRng;
use rand::SeedableRng;

use sorogen::application::{rule_from_settings, ExerciseGenerator, SettingsError, TrainingSettings};
use sorogen::domain::column::ColumnState;
use sorogen::domain::rule::{DigitSet, Rule, StepRange};
use sorogen::presentation::{format_chain, to_display};

/// ドメイン層の統合テスト
mod domain_integration {
    use super::*;

    #[test]
    fn available_actions_respect_bead_physics() {
        // 全状態を総当たりして珠の二重操作がないことを確認
        let rule = Rule::unified(
            DigitSet::new(&[1, 2, 3, 4, 5]).unwrap(),
            StepRange::new(2, 4).unwrap(),
        )
        .unwrap();

        for v in 0..=9 {
            let state = ColumnState::new(v).unwrap();
            let candidates = rule.available_actions(state, false);
            for action in candidates.actions() {
                if action.is_upper() {
                    if action.is_positive() {
                        assert!(!state.upper_engaged(), "状態{}で+5", v);
                    } else {
                        assert!(state.upper_engaged(), "状態{}で-5", v);
                    }
                } else if action.is_positive() {
                    assert!(state.lower_free() >= action.magnitude(), "状態{}で{}", v, action);
                } else {
                    assert!(
                        state.lower_engaged() >= action.magnitude(),
                        "状態{}で{}",
                        v,
                        action
                    );
                }
            }
        }
    }

    #[test]
    fn intermediate_states_never_leave_rule_range() {
        let rule = Rule::unified(
            DigitSet::new(&[1, 2, 3, 4, 5]).unwrap(),
            StepRange::new(2, 6).unwrap(),
        )
        .unwrap();
        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let ex = generator.generate_with_rng(&mut rng).unwrap();
            for step in &ex.steps {
                assert!(step.to_state.get() <= generator.rule().max_state());
            }
            // 途中で9まで膨らんでも答えは閉じる
            assert!(ex.answer.get() <= generator.rule().max_final_state());
        }
    }

    #[test]
    fn every_generated_exercise_revalidates() {
        let rule = Rule::unified(
            DigitSet::new(&[1, 2, 3, 4]).unwrap(),
            StepRange::new(1, 5).unwrap(),
        )
        .unwrap();
        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..200 {
            let ex = generator.generate_with_rng(&mut rng).unwrap();
            let report = generator.rule().validate_example(&ex);
            assert!(report.is_valid(), "エラー: {:?}", report.errors());
            assert_eq!(i32::from(ex.answer.get()), ex.recomputed_answer());
        }
    }
}

/// アプリケーション層の統合テスト
mod application_integration {
    use super::*;

    #[test]
    fn settings_to_generator_workflow() {
        let settings = TrainingSettings {
            selected_digits: vec![1, 2, 3, 4, 5],
            min_steps: 3,
            max_steps: 3,
            ..TrainingSettings::default()
        };
        let rule = rule_from_settings(&settings).unwrap();
        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(3);

        let ex = generator.generate_with_rng(&mut rng).unwrap();
        assert_eq!(ex.steps_len(), 3);
        assert!(ex.actions().iter().any(|a| a.is_upper()));
    }

    #[test]
    fn default_settings_generate_lower_only_exercises() {
        let rule = rule_from_settings(&TrainingSettings::default()).unwrap();
        assert!(!rule.has_upper());

        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let ex = generator.generate_with_rng(&mut rng).unwrap();
            assert!(ex.actions().iter().all(|a| !a.is_upper()));
            assert!(ex.answer.get() <= 4);
        }
    }

    #[test]
    fn addition_only_settings_never_emit_negative() {
        let settings = TrainingSettings {
            selected_digits: vec![1, 2],
            only_addition: true,
            min_steps: 1,
            max_steps: 2,
            ..TrainingSettings::default()
        };
        let rule = rule_from_settings(&settings).unwrap();
        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let ex = generator.generate_with_rng(&mut rng).unwrap();
            assert!(ex.actions().iter().all(|a| a.is_positive()));
        }
    }

    #[test]
    fn configuration_errors_surface_before_generation() {
        let both = TrainingSettings {
            only_addition: true,
            only_subtraction: true,
            ..TrainingSettings::default()
        };
        assert!(matches!(
            rule_from_settings(&both),
            Err(SettingsError::ContradictoryRestriction)
        ));

        let bad_digit = TrainingSettings {
            selected_digits: vec![7],
            ..TrainingSettings::default()
        };
        assert!(matches!(
            rule_from_settings(&bad_digit),
            Err(SettingsError::DigitOutOfRange { digit: 7 })
        ));
    }

    #[test]
    fn unique_batch_is_pairwise_distinct() {
        let settings = TrainingSettings {
            selected_digits: vec![1, 2, 3],
            min_steps: 2,
            max_steps: 4,
            ..TrainingSettings::default()
        };
        let generator = ExerciseGenerator::new(rule_from_settings(&settings).unwrap());
        let mut rng = StdRng::seed_from_u64(6);

        let batch = generator.generate_unique_with_rng(30, &mut rng).unwrap();
        for (i, a) in batch.iter().enumerate() {
            for b in &batch[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

/// プレゼンテーション層の統合テスト
mod presentation_integration {
    use super::*;

    #[test]
    fn display_projection_matches_exercise() {
        let rule = Rule::unified(
            DigitSet::new(&[1, 2, 3, 4]).unwrap(),
            StepRange::new(2, 4).unwrap(),
        )
        .unwrap();
        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(7);

        let ex = generator.generate_with_rng(&mut rng).unwrap();
        let display = to_display(generator.rule(), &ex);

        assert_eq!(display.start, None);
        assert_eq!(display.steps.len(), ex.steps_len());
        assert_eq!(display.answer, ex.answer.get());

        // 表示文字列を読み戻すと答えに一致する
        let sum: i32 = display
            .steps
            .iter()
            .map(|s| s.parse::<i32>().unwrap())
            .sum();
        assert_eq!(sum, i32::from(ex.answer.get()));
    }

    #[test]
    fn chain_format_ends_with_answer() {
        let rule = Rule::unified(
            DigitSet::new(&[1, 2]).unwrap(),
            StepRange::new(2, 3).unwrap(),
        )
        .unwrap();
        let generator = ExerciseGenerator::new(rule);
        let mut rng = StdRng::seed_from_u64(8);

        let ex = generator.generate_with_rng(&mut rng).unwrap();
        let line = format_chain(generator.rule(), &ex);
        assert!(line.ends_with(&format!("= {}", ex.answer)));
    }
}

/// エンドツーエンドテスト（設定 → ルール → 生成 → 検証 → 表示）
#[test]
fn end_to_end_workflow() {
    // 1. 設定層からのJSONを受け取る
    let json = r#"{
        "selected_digits": [1, 2, 3, 4, 5],
        "min_steps": 2,
        "max_steps": 4,
        "five_bias": 5
    }"#;
    let settings: TrainingSettings = serde_json::from_str(json).unwrap();

    // 2. アダプタでルールを構築
    let rule = rule_from_settings(&settings).unwrap();
    assert!(rule.has_upper());

    // 3. バッチ生成
    let generator = ExerciseGenerator::new(rule);
    let mut rng = StdRng::seed_from_u64(9);
    let batch = generator.generate_unique_with_rng(10, &mut rng).unwrap();
    assert!(!batch.is_empty());

    // 4. 全例題が検証を通り、表示に射影できる
    for ex in &batch {
        assert!(generator.rule().validate_example(ex).is_valid());
        let display = to_display(generator.rule(), ex);
        let json = serde_json::to_string(&display).unwrap();
        assert!(json.contains("\"answer\""));
        assert!(!json.contains("\"start\""));
    }
}
