//! Aggregated match results and their terminal presentation.

use colored::*;

const ELO_K: f64 = 400.0;

/// Which configuration won a single game.
#[derive(Debug, Clone, Copy)]
pub enum MatchWinner {
    Engine1,
    Engine2,
    Draw,
}

/// Running totals across the games of one match.
#[derive(Debug, Clone, Default)]
pub struct MatchStatistics {
    pub engine1_wins: u32,
    pub engine2_wins: u32,
    pub draws: u32,
    /// Sum of per-game disc differentials from engine 1's perspective.
    pub total_score: i32,
}

impl MatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished game.
    ///
    /// # Arguments
    ///
    /// * `winner` - The game outcome.
    /// * `score` - Disc differential from engine 1's perspective.
    pub fn add_result(&mut self, winner: MatchWinner, score: i32) {
        match winner {
            MatchWinner::Engine1 => self.engine1_wins += 1,
            MatchWinner::Engine2 => self.engine2_wins += 1,
            MatchWinner::Draw => self.draws += 1,
        }
        self.total_score += score;
    }

    pub fn total_games(&self) -> u32 {
        self.engine1_wins + self.engine2_wins + self.draws
    }

    pub fn engine1_win_rate(&self) -> f64 {
        if self.total_games() == 0 {
            0.0
        } else {
            (self.engine1_wins as f64 / self.total_games() as f64) * 100.0
        }
    }

    pub fn engine2_win_rate(&self) -> f64 {
        if self.total_games() == 0 {
            0.0
        } else {
            (self.engine2_wins as f64 / self.total_games() as f64) * 100.0
        }
    }

    /// Prints the final match report: summary, win-rate bars and the Elo
    /// estimate.
    pub fn print_final_results(&self, engine1_name: &str, engine2_name: &str) {
        let total_games = self.total_games();
        if total_games == 0 {
            println!("No games were played.");
            return;
        }

        println!("{}", "═".repeat(72).bright_cyan());
        println!("{:^72}", "MATCH RESULTS".bright_white().bold());
        println!("{}", "═".repeat(72).bright_cyan());
        println!();

        println!(
            "{} {}",
            "Total Games:".bright_white(),
            total_games.to_string().bright_yellow().bold()
        );
        println!(
            "{} {} / {} / {}",
            "Results:".bright_white(),
            format!("{} wins", self.engine1_wins).bright_green(),
            format!("{} draws", self.draws).bright_blue(),
            format!("{} losses", self.engine2_wins).bright_red()
        );
        println!(
            "{} {:+}",
            "Total disc differential:".bright_white(),
            self.total_score
        );
        println!();

        self.print_win_rate_bars(engine1_name, engine2_name);
        println!();
        self.print_elo_estimate(engine1_name, engine2_name, total_games);

        println!("{}", "═".repeat(72).bright_cyan());
    }

    fn print_win_rate_bars(&self, engine1_name: &str, engine2_name: &str) {
        let total = self.total_games() as f64;
        let bar_width = 50;
        let name_width = engine1_name
            .len()
            .max(engine2_name.len())
            .max("Draws".len());

        println!("{}", "Win Rate".bright_white().underline());
        println!();

        let rows = [
            (
                engine1_name.to_string(),
                self.engine1_wins,
                self.engine1_win_rate(),
                Color::BrightGreen,
            ),
            (
                "Draws".to_string(),
                self.draws,
                (self.draws as f64 / total) * 100.0,
                Color::BrightBlue,
            ),
            (
                engine2_name.to_string(),
                self.engine2_wins,
                self.engine2_win_rate(),
                Color::BrightRed,
            ),
        ];

        for (label, count, percentage, color) in rows {
            let filled = ((count as f64 / total) * bar_width as f64) as usize;
            let bar = "█".repeat(filled).color(color);
            let empty = "░".repeat(bar_width - filled).bright_black();
            println!(
                "{:>width$} {} {} {:.1}%",
                label.bright_cyan(),
                bar,
                empty,
                percentage,
                width = name_width
            );
        }
    }

    fn print_elo_estimate(&self, engine1_name: &str, engine2_name: &str, total_games: u32) {
        let elo = EloCalculator::calculate_stats(
            self.engine1_wins,
            self.engine2_wins,
            self.draws,
            total_games,
        );

        println!("{}", "Elo Rating".bright_white().underline());
        println!();

        let elo_display = if elo.elo_diff.is_infinite() {
            let sign = if elo.elo_diff > 0.0 { "∞" } else { "-∞" };
            format!(
                "{} {}",
                sign.bright_green().bold(),
                "(dominant performance)".bright_black()
            )
        } else {
            let elo_str = format!("{:+.2}", elo.elo_diff);
            let confidence_str = format!("± {:.2} (95%)", elo.confidence_interval);
            let colored_elo = if elo.elo_diff > 0.0 {
                elo_str.bright_green().bold()
            } else if elo.elo_diff < 0.0 {
                elo_str.bright_red().bold()
            } else {
                elo_str.bright_yellow().bold()
            };
            format!("{} {}", colored_elo, confidence_str.bright_black())
        };
        println!("{:>16}: {}", "Elo Difference".bright_white(), elo_display);

        let verdict = if elo.elo_diff.abs() > 100.0 || elo.elo_diff.is_infinite() {
            let stronger = if elo.elo_diff > 0.0 {
                engine1_name
            } else {
                engine2_name
            };
            format!("{stronger} is significantly stronger")
        } else if elo.elo_diff.abs() > 20.0 {
            let stronger = if elo.elo_diff > 0.0 {
                engine1_name
            } else {
                engine2_name
            };
            format!("{stronger} has the edge")
        } else {
            "Configurations are evenly matched".to_string()
        };
        println!("{:>16}: {}", "Performance".bright_white(), verdict.bright_blue());
    }
}

/// Elo difference with its confidence interval.
pub struct EloStats {
    pub elo_diff: f64,
    pub confidence_interval: f64,
}

pub struct EloCalculator;

impl EloCalculator {
    /// Estimates the Elo difference between the two configurations from the
    /// win/loss/draw record, with a 95% confidence interval.
    pub fn calculate_stats(wins: u32, losses: u32, draws: u32, total_games: u32) -> EloStats {
        if total_games == 0 {
            return EloStats {
                elo_diff: 0.0,
                confidence_interval: 0.0,
            };
        }

        let n = total_games as f64;
        let w = wins as f64;
        let d = draws as f64;
        let l = losses as f64;

        let p_hat = (w + 0.5 * d) / n;

        let elo_diff = if p_hat == 0.0 || p_hat == 1.0 {
            if p_hat > 0.5 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            -ELO_K * (-(p_hat / (1.0 - p_hat)).ln()) / std::f64::consts::LN_10
        };

        let wld_var = w * (1.0 - p_hat).powi(2) + l * p_hat.powi(2) + d * (0.5 - p_hat).powi(2);
        let se_elo = if p_hat == 0.0 || p_hat == 1.0 {
            f64::INFINITY
        } else {
            (ELO_K / (std::f64::consts::LN_10 * n)) * wld_var.sqrt() / (p_hat * (1.0 - p_hat))
        };

        EloStats {
            elo_diff,
            confidence_interval: 1.96 * se_elo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_accumulate() {
        let mut stats = MatchStatistics::new();
        stats.add_result(MatchWinner::Engine1, 12);
        stats.add_result(MatchWinner::Engine2, -4);
        stats.add_result(MatchWinner::Draw, 0);

        assert_eq!(stats.total_games(), 3);
        assert_eq!(stats.total_score, 8);
        assert!((stats.engine1_win_rate() - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_even_record_is_zero_elo() {
        let elo = EloCalculator::calculate_stats(5, 5, 0, 10);
        assert!(elo.elo_diff.abs() < f64::EPSILON);
    }

    #[test]
    fn test_shutout_is_infinite_elo() {
        let elo = EloCalculator::calculate_stats(10, 0, 0, 10);
        assert!(elo.elo_diff.is_infinite() && elo.elo_diff > 0.0);
    }
}
