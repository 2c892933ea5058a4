// ============================================================================
// INSTALL STATE - Máquina de estados del prompt de instalación (PWA)
// ============================================================================
// idle → offered (señal de la plataforma) → { installed, dismissed }
// El descarte persiste entre sesiones: offered no se re-entra nunca después.
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallPromptState {
    Idle,
    Offered,
    Installed,
    Dismissed,
}

impl InstallPromptState {
    /// Estado inicial según el flag persistido de sesiones anteriores
    pub fn from_persisted(dismissed: bool) -> Self {
        if dismissed {
            InstallPromptState::Dismissed
        } else {
            InstallPromptState::Idle
        }
    }

    /// Transición al recibir la señal de disponibilidad. Solo desde Idle.
    pub fn offer(self) -> Self {
        match self {
            InstallPromptState::Idle => InstallPromptState::Offered,
            other => other,
        }
    }

    /// El usuario aceptó y la plataforma confirmó la instalación
    pub fn installed(self) -> Self {
        match self {
            InstallPromptState::Offered => InstallPromptState::Installed,
            other => other,
        }
    }

    /// Cierre explícito del banner o rechazo en el diálogo de la plataforma
    pub fn dismissed(self) -> Self {
        match self {
            InstallPromptState::Idle | InstallPromptState::Offered => {
                InstallPromptState::Dismissed
            }
            other => other,
        }
    }

    pub fn is_offered(&self) -> bool {
        matches!(self, InstallPromptState::Offered)
    }
}

/// User agents móviles a los que se ofrece la instalación
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ["iphone", "ipad", "ipod", "android"]
        .iter()
        .any(|needle| ua.contains(needle))
}

/// Decide si corresponde pasar a Offered: solo en móvil, solo si la app no
/// corre ya en modo standalone, y solo desde Idle.
pub fn should_offer(state: InstallPromptState, is_mobile: bool, is_standalone: bool) -> bool {
    state == InstallPromptState::Idle && is_mobile && !is_standalone
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismissal_persists_across_sessions() {
        // Sesión 1: el usuario cierra el banner
        let state = InstallPromptState::from_persisted(false).offer().dismissed();
        assert_eq!(state, InstallPromptState::Dismissed);

        // Sesión 2: el flag persistido impide volver a offered
        let state = InstallPromptState::from_persisted(true);
        assert_eq!(state.offer(), InstallPromptState::Dismissed);
        assert!(!should_offer(state, true, false));
    }

    #[test]
    fn test_offer_only_from_idle() {
        assert_eq!(
            InstallPromptState::Idle.offer(),
            InstallPromptState::Offered
        );
        assert_eq!(
            InstallPromptState::Installed.offer(),
            InstallPromptState::Installed
        );
        assert_eq!(
            InstallPromptState::Dismissed.offer(),
            InstallPromptState::Dismissed
        );
    }

    #[test]
    fn test_accepted_prompt_reaches_installed() {
        let state = InstallPromptState::Idle.offer().installed();
        assert_eq!(state, InstallPromptState::Installed);
        // installed es terminal
        assert_eq!(state.dismissed(), InstallPromptState::Installed);
    }

    #[test]
    fn test_should_offer_requires_mobile_and_not_standalone() {
        assert!(should_offer(InstallPromptState::Idle, true, false));
        assert!(!should_offer(InstallPromptState::Idle, false, false));
        assert!(!should_offer(InstallPromptState::Idle, true, true));
        assert!(!should_offer(InstallPromptState::Offered, true, false));
    }

    #[test]
    fn test_mobile_user_agent_detection() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8)"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
        ));
    }
}
