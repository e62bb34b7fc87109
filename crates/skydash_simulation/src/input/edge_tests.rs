//! Tests for ButtonEdge / ResetTimer.

#[cfg(test)]
mod tests {
    use crate::input::*;

    const DT: f32 = 0.02;

    /// Один fixed tick: отсчёт окна → события → (потребители) → end_tick
    fn run_tick(edge: &mut ButtonEdge, events: &[bool]) -> (bool, bool, bool) {
        edge.tick(DT);
        for &pressed in events {
            if pressed {
                edge.on_activate();
            } else {
                edge.on_deactivate();
            }
        }
        let observed = (edge.just_pressed(), edge.just_released(), edge.double_activated());
        edge.end_tick();
        observed
    }

    #[test]
    fn test_press_pulse_lasts_one_tick() {
        let mut edge = ButtonEdge::new(0.3);

        assert_eq!(edge.on_activate(), Activation::Press);
        assert!(edge.just_pressed());
        assert!(edge.is_down());

        // Повторный опрос в том же tick даёт тот же результат
        assert!(edge.just_pressed());

        edge.end_tick();
        assert!(!edge.just_pressed());
        assert!(edge.is_down()); // level state остаётся
    }

    #[test]
    fn test_release_pulse() {
        let mut edge = ButtonEdge::new(0.3);
        edge.on_activate();
        edge.end_tick();

        assert!(edge.on_deactivate());
        assert!(edge.just_released());
        assert!(!edge.is_down());

        edge.end_tick();
        assert!(!edge.just_released());
    }

    #[test]
    fn test_double_activation_inside_window() {
        let mut edge = ButtonEdge::new(0.5);

        // t = 0: обычный press + release
        assert_eq!(run_tick(&mut edge, &[true]), (true, false, false));
        assert_eq!(run_tick(&mut edge, &[false]), (false, true, false));
        assert!(edge.awaiting_second_activation());

        // Ждём 0.3s (15 тиков), окно ещё открыто
        for _ in 0..13 {
            assert_eq!(run_tick(&mut edge, &[]), (false, false, false));
        }

        // Вторая активация: только double, без press
        assert_eq!(run_tick(&mut edge, &[true]), (false, false, true));
        assert!(!edge.awaiting_second_activation());

        // Её release тоже подавлен
        assert_eq!(run_tick(&mut edge, &[false]), (false, false, false));
    }

    #[test]
    fn test_second_activation_after_window_is_ordinary() {
        let mut edge = ButtonEdge::new(0.5);

        run_tick(&mut edge, &[true, false]);

        // 0.7s > окна
        for _ in 0..35 {
            run_tick(&mut edge, &[]);
        }
        assert!(!edge.awaiting_second_activation());

        assert_eq!(run_tick(&mut edge, &[true]), (true, false, false));
        assert_eq!(run_tick(&mut edge, &[false]), (false, true, false));
    }

    #[test]
    fn test_gap_equal_to_window_is_two_presses() {
        let mut edge = ButtonEdge::new(0.3);

        // t = 0: press, release на следующем tick
        assert_eq!(run_tick(&mut edge, &[true]), (true, false, false));
        assert_eq!(run_tick(&mut edge, &[false]), (false, true, false));
        for _ in 0..13 {
            run_tick(&mut edge, &[]);
        }

        // t = 0.3 = double_click_time: окно закрыто, обычный press
        assert_eq!(run_tick(&mut edge, &[true]), (true, false, false));
        assert_eq!(run_tick(&mut edge, &[false]), (false, true, false));
    }

    #[test]
    fn test_gap_one_tick_short_of_window_is_double() {
        let mut edge = ButtonEdge::new(0.3);

        run_tick(&mut edge, &[true]);
        run_tick(&mut edge, &[false]);
        for _ in 0..12 {
            run_tick(&mut edge, &[]);
        }

        // t = 0.28 < 0.3
        assert_eq!(run_tick(&mut edge, &[true]), (false, false, true));
    }

    #[test]
    fn test_rapid_toggle_in_one_tick_not_collapsed() {
        let mut edge = ButtonEdge::new(0.0);

        // press-release-press внутри одного tick, окно выключено
        let (pressed, released, double) = run_tick(&mut edge, &[true, false, true]);
        assert!(pressed);
        assert!(released);
        assert!(!double);
    }

    #[test]
    fn test_rapid_toggle_with_window_fires_double_once() {
        let mut edge = ButtonEdge::new(0.3);

        let (pressed, released, double) = run_tick(&mut edge, &[true, false, true]);
        assert!(pressed); // первая активация
        assert!(released); // её release
        assert!(double); // вторая внутри окна

        // Третья активация открывает новое окно, а не второй double
        assert_eq!(run_tick(&mut edge, &[false, true]), (true, false, false));
    }

    #[test]
    fn test_zero_window_never_awaits() {
        let mut edge = ButtonEdge::new(0.0);
        edge.on_activate();
        assert!(!edge.awaiting_second_activation());
        edge.end_tick();
        edge.on_deactivate();
        edge.end_tick();

        assert_eq!(edge.on_activate(), Activation::Press);
    }

    #[test]
    fn test_reset_timer_restart_invalidates_generation() {
        let mut timer = ResetTimer::default();

        let first = timer.restart(0.5);
        assert!(timer.is_current(first));

        let second = timer.restart(0.5);
        assert!(!timer.is_current(first));
        assert!(timer.is_current(second));

        timer.cancel();
        assert!(!timer.is_current(second));
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_timer_expiry_reports_generation() {
        let mut timer = ResetTimer::default();
        let generation = timer.restart(0.05);

        assert_eq!(timer.tick(0.02), None);
        assert_eq!(timer.tick(0.02), None);
        assert_eq!(timer.tick(0.02), Some(generation));
        assert_eq!(timer.tick(0.02), None);
        assert_eq!(timer.remaining(), 0.0);
    }
}
