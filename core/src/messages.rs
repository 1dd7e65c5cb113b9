//! Interface strings in both supported locales. Everything the user reads,
//! from notifications to form labels, comes from here so a page never mixes
//! languages.

use shared::Page;

use crate::api::Collection;
use crate::format::Locale;

/// A fixed piece of interface text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    // Outcomes
    AccountCreated,
    TransactionAdded,
    InvestmentCreated,
    GoalCreated,
    AccountDeleted,
    TransactionDeleted,
    InvestmentDeleted,
    GoalDeleted,
    CreateAccountFailed,
    AddTransactionFailed,
    CreateInvestmentFailed,
    CreateGoalFailed,
    DeleteAccountFailed,
    DeleteTransactionFailed,
    DeleteInvestmentFailed,
    DeleteGoalFailed,
    UpdateGoalFailed,
    LoadFailed,
    ServerUnreachable,
    Loading,

    // Validation
    AmountNotPositive,
    SelectAccount,

    // Actions
    Cancel,
    Delete,
    AddFunds,
    AddFundsPrompt,
    NewAccount,
    NewTransaction,
    NewInvestment,
    NewGoal,
    CreateAccount,
    AddTransaction,
    CreateInvestment,
    CreateGoal,

    // Form fields
    Name,
    Type,
    OpeningBalance,
    Account,
    Category,
    Amount,
    Description,
    Date,
    FundingAccount,
    AmountInvested,
    CurrentValueOptional,
    Title,
    TargetAmount,
    AlreadySaved,
    AccountTypeHint,
    InvestmentTypeHint,

    // Figures and headings
    TotalBalance,
    ThisMonth,
    MonthlyExpenses,
    ActiveGoals,
    CurrentValue,
    Invested,
    Return,
    InvestmentTrend,
    IncomeVsExpenses,
    ExpensesByCategory,
    RecentTransactions,

    // Empty states
    NoAccountsYet,
    NoAccountsAvailable,
    NoTransactions,
    NoTransactionsRecorded,
    NoInvestmentsYet,
    NoActiveGoals,
    NoExpensesThisMonth,
    NoDescription,
    UnknownAccount,
}

impl Text {
    /// `(italian, english)`
    fn pair(self) -> (&'static str, &'static str) {
        use Text::*;
        match self {
            AccountCreated => ("Conto creato", "Account created"),
            TransactionAdded => ("Transazione aggiunta", "Transaction added"),
            InvestmentCreated => (
                "Investimento creato e fondi prelevati dal conto",
                "Investment created and funds withdrawn from the account",
            ),
            GoalCreated => ("Obiettivo creato", "Goal created"),
            AccountDeleted => ("Conto eliminato", "Account deleted"),
            TransactionDeleted => ("Transazione eliminata", "Transaction deleted"),
            InvestmentDeleted => ("Investimento eliminato", "Investment deleted"),
            GoalDeleted => ("Obiettivo eliminato", "Goal deleted"),
            CreateAccountFailed => ("Impossibile creare il conto", "Could not create account"),
            AddTransactionFailed => (
                "Impossibile aggiungere la transazione",
                "Could not add transaction",
            ),
            CreateInvestmentFailed => (
                "Impossibile creare l'investimento",
                "Could not create investment",
            ),
            CreateGoalFailed => ("Impossibile creare l'obiettivo", "Could not create goal"),
            DeleteAccountFailed => ("Impossibile eliminare il conto", "Could not delete account"),
            DeleteTransactionFailed => (
                "Impossibile eliminare la transazione",
                "Could not delete transaction",
            ),
            DeleteInvestmentFailed => (
                "Impossibile eliminare l'investimento",
                "Could not delete investment",
            ),
            DeleteGoalFailed => ("Impossibile eliminare l'obiettivo", "Could not delete goal"),
            UpdateGoalFailed => ("Impossibile aggiornare l'obiettivo", "Could not update goal"),
            LoadFailed => ("Impossibile caricare i dati", "Could not load data"),
            ServerUnreachable => (
                "Server non raggiungibile. Verifica che il backend sia avviato.",
                "Could not reach the server. Check that the backend is running.",
            ),
            Loading => ("Caricamento...", "Loading..."),

            AmountNotPositive => (
                "Inserisci un importo maggiore di zero",
                "Enter an amount greater than zero",
            ),
            SelectAccount => ("Seleziona un conto", "Select an account"),

            Cancel => ("Annulla", "Cancel"),
            Delete => ("Elimina", "Delete"),
            AddFunds => ("Aggiungi fondi", "Add funds"),
            AddFundsPrompt => (
                "Quanto vuoi aggiungere a questo obiettivo?",
                "How much do you want to add to this goal?",
            ),
            NewAccount => ("Nuovo conto", "New account"),
            NewTransaction => ("Nuova transazione", "New transaction"),
            NewInvestment => ("Nuovo investimento", "New investment"),
            NewGoal => ("Nuovo obiettivo", "New goal"),
            CreateAccount => ("Crea conto", "Create account"),
            AddTransaction => ("Aggiungi transazione", "Add transaction"),
            CreateInvestment => ("Crea investimento", "Create investment"),
            CreateGoal => ("Crea obiettivo", "Create goal"),

            Name => ("Nome", "Name"),
            Type => ("Tipo", "Type"),
            OpeningBalance => ("Saldo iniziale", "Opening balance"),
            Account => ("Conto", "Account"),
            Category => ("Categoria", "Category"),
            Amount => ("Importo", "Amount"),
            Description => ("Descrizione", "Description"),
            Date => ("Data", "Date"),
            FundingAccount => ("Conto di addebito", "Funding account"),
            AmountInvested => ("Importo investito", "Amount invested"),
            CurrentValueOptional => ("Valore attuale (opzionale)", "Current value (optional)"),
            Title => ("Titolo", "Title"),
            TargetAmount => ("Importo obiettivo", "Target amount"),
            AlreadySaved => ("Già risparmiato (opzionale)", "Already saved (optional)"),
            AccountTypeHint => ("Conto corrente, Risparmio...", "Current account, Savings..."),
            InvestmentTypeHint => ("ETF, Azioni, Obbligazioni...", "ETF, Stocks, Bonds..."),

            TotalBalance => ("Saldo totale", "Total balance"),
            ThisMonth => ("Questo mese", "This month"),
            MonthlyExpenses => ("Spese mensili", "Monthly expenses"),
            ActiveGoals => ("Obiettivi attivi", "Active goals"),
            CurrentValue => ("Valore attuale", "Current value"),
            Invested => ("Investito", "Invested"),
            Return => ("Rendimento", "Return"),
            InvestmentTrend => ("Andamento investimenti", "Investment trend"),
            IncomeVsExpenses => ("Entrate e uscite", "Income vs expenses"),
            ExpensesByCategory => ("Spese per categoria", "Expenses by category"),
            RecentTransactions => ("Transazioni recenti", "Recent transactions"),

            NoAccountsYet => (
                "Nessun conto disponibile. Creane uno nuovo!",
                "No accounts yet. Create one to get started!",
            ),
            NoAccountsAvailable => ("Nessun conto disponibile", "No accounts available"),
            NoTransactions => ("Nessuna transazione", "No transactions"),
            NoTransactionsRecorded => (
                "Nessuna transazione registrata.",
                "No transactions recorded.",
            ),
            NoInvestmentsYet => (
                "Nessun investimento. Aggiungi il primo!",
                "No investments yet. Add your first one!",
            ),
            NoActiveGoals => (
                "Nessun obiettivo attivo. Creane uno per iniziare a risparmiare!",
                "No active goals. Set one to start saving!",
            ),
            NoExpensesThisMonth => ("Nessuna spesa questo mese", "No expenses this month"),
            NoDescription => ("Nessuna descrizione", "No description"),
            UnknownAccount => ("Conto sconosciuto", "Unknown account"),
        }
    }
}

impl Locale {
    pub fn text(self, text: Text) -> &'static str {
        let (italian, english) = text.pair();
        match self {
            Locale::Italian => italian,
            Locale::English => english,
        }
    }

    pub fn page_title(self, page: Page) -> &'static str {
        match self {
            Locale::Italian => page.title(),
            Locale::English => match page {
                Page::Dashboard => "Dashboard",
                Page::Accounts => "Accounts",
                Page::Transactions => "Transactions",
                Page::Investments => "Investments",
                Page::Goals => "Goals",
            },
        }
    }

    pub fn confirm_delete(self, collection: Collection) -> &'static str {
        match (self, collection) {
            (Locale::Italian, Collection::Accounts) => "Sei sicuro di voler eliminare questo conto?",
            (Locale::Italian, Collection::Transactions) => {
                "Sei sicuro di voler eliminare questa transazione?"
            }
            (Locale::Italian, Collection::Investments) => {
                "Sei sicuro di voler eliminare questo investimento?"
            }
            (Locale::Italian, Collection::Goals) => "Sei sicuro di voler eliminare questo obiettivo?",
            (Locale::English, Collection::Accounts) => "Are you sure you want to delete this account?",
            (Locale::English, Collection::Transactions) => {
                "Are you sure you want to delete this transaction?"
            }
            (Locale::English, Collection::Investments) => {
                "Are you sure you want to delete this investment?"
            }
            (Locale::English, Collection::Goals) => "Are you sure you want to delete this goal?",
        }
    }

    pub fn account_count(self, count: usize) -> String {
        match self {
            Locale::Italian => format!("{} conti", count),
            Locale::English => format!("{} accounts", count),
        }
    }

    pub fn completed_count(self, count: usize) -> String {
        match self {
            Locale::Italian => format!("{} completati", count),
            Locale::English => format!("{} completed", count),
        }
    }

    /// "€500 of €2,000" progress line
    pub fn amount_of(self, current: &str, target: &str) -> String {
        match self {
            Locale::Italian => format!("{} di {}", current, target),
            Locale::English => format!("{} of {}", current, target),
        }
    }

    pub fn funds_added(self, amount: &str) -> String {
        match self {
            Locale::Italian => format!("Aggiunti {} all'obiettivo", amount),
            Locale::English => format!("Added {} to the goal", amount),
        }
    }
}
